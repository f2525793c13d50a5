//! Formatting utilities used for CLI and export outputs.

use crate::utils::colors::{GREEN, GREY, RESET, YELLOW};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn italic(s: &str) -> String {
    format!("\x1b[3m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Remove ANSI escape sequences, leaving the visible text.
/// Needed wherever column widths are computed on colored strings.
pub fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

pub fn check_mark(done: bool) -> &'static str {
    if done { "✓" } else { "✗" }
}

/// Restituisce una descrizione testuale e un colore ANSI per la confidenza.
/// Usata nei test e in eventuali output human-readable.
pub fn describe_confidence(level: &str) -> (String, &'static str) {
    match level.to_lowercase().as_str() {
        "high" => ("High".into(), GREEN),
        "medium" => ("Medium".into(), YELLOW),
        "low" => ("Low".into(), GREY),
        other => (other.to_string(), RESET),
    }
}
