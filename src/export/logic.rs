// src/export/logic.rs

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::csv::write_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::write_json;
use crate::export::model::SessionExport;
use crate::export::notify_export_success;
use crate::models::WalkSession;
use crate::store::SessionStore;
use crate::store::audit::wlog;
use crate::ui::messages::warning;
use crate::utils::date::range_bounds;

use chrono::NaiveDate;
use std::io;
use std::path::Path;

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export delle sessioni.
    ///
    /// - `format`: "csv" | "json"
    /// - `file`: path assoluto del file di output
    /// - `range`: `None`, `"all"` oppure espressioni come:
    ///   - `YYYY`
    ///   - `YYYY-MM`
    ///   - `YYYY-MM-DD`
    ///   - `YYYY:YYYY`
    ///   - `YYYY-MM:YYYY-MM`
    ///   - `YYYY-MM-DD:YYYY-MM-DD`
    pub fn export(
        store: &SessionStore,
        cfg: &Config,
        format: ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) => range_bounds(r)?,
        };

        let sessions = load_sessions(store, date_bounds)?;

        if sessions.is_empty() {
            warning("⚠️  No sessions found for selected range.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => {
                let rows: Vec<SessionExport> =
                    sessions.iter().map(SessionExport::from_session).collect();
                write_csv(path, &rows)?;
                notify_export_success("CSV", path);
            }
            ExportFormat::Json => {
                write_json(path, &sessions)?;
                notify_export_success("JSON", path);
            }
        }

        if cfg.log_operations {
            let _ = wlog(
                &Config::log_file(),
                "export",
                &path.to_string_lossy(),
                &format!("Exported {} session(s) as {}", sessions.len(), format.as_str()),
            );
        }

        Ok(())
    }
}

/// Sessioni nel range richiesto (bounds inclusivi, date locali).
fn load_sessions(
    store: &SessionStore,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<WalkSession>> {
    let sessions = store.load()?;

    Ok(match bounds {
        None => sessions,
        Some((start, end)) => sessions
            .into_iter()
            .filter(|s| {
                let d = s.local_date();
                d >= start && d <= end
            })
            .collect(),
    })
}
