use crate::errors::AppResult;
use crate::models::WalkSession;
use std::path::Path;

/// Scrive le sessioni in JSON formattato.
///
/// The output is the same array schema as the session store itself, so an
/// exported file can be loaded back or handed to the companion tools.
pub fn write_json(path: &Path, sessions: &[WalkSession]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(sessions)?;
    std::fs::write(path, json + "\n")?;
    Ok(())
}
