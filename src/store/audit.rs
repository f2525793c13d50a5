use crate::errors::AppResult;
use crate::utils::path::ensure_parent_dir;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// One line of the operations log.
#[derive(Debug, Serialize, Deserialize)]
pub struct LogEntry {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Append an internal log line to the operations log.
pub fn wlog(path: &Path, operation: &str, target: &str, message: &str) -> AppResult<()> {
    // Timestamp locale, formattato in ISO 8601
    let now = Local::now().to_rfc3339();

    let entry = LogEntry {
        date: now,
        operation: operation.to_string(),
        target: target.to_string(),
        message: message.to_string(),
    };

    ensure_parent_dir(path)?;
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", serde_json::to_string(&entry)?)?;

    Ok(())
}

/// Load all log entries, newest first. Damaged lines are skipped.
pub fn load_log(path: &Path) -> AppResult<Vec<LogEntry>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    let mut out: Vec<LogEntry> = content
        .lines()
        .filter_map(|line| serde_json::from_str(line.trim()).ok())
        .collect();

    out.reverse();
    Ok(out)
}
