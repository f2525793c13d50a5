use crate::errors::AppResult;
use crate::export::model::{SessionExport, get_headers, session_to_row};
use csv::Writer;
use std::path::Path;

/// Scrive le sessioni in CSV nel file indicato.
pub fn write_csv(path: &Path, rows: &[SessionExport]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(get_headers())?;

    for row in rows {
        wtr.write_record(session_to_row(row))?;
    }

    wtr.flush()?;
    Ok(())
}
