//! Duration parsing and formatting. Durations are whole seconds everywhere.

use crate::errors::{AppError, AppResult};

/// Parses a duration given on the command line.
///
/// Accepts plain seconds (`300`), clock form (`5:00`, `1:10:30`)
/// and suffix form (`5m`, `90s`, `1h10m30s`).
pub fn parse_duration(s: &str) -> AppResult<u32> {
    let raw = s.trim();
    if raw.is_empty() {
        return Err(AppError::InvalidDuration(s.to_string()));
    }

    let secs = if let Ok(plain) = raw.parse::<u32>() {
        Some(plain)
    } else if raw.contains(':') {
        parse_clock(raw)
    } else {
        parse_suffixed(raw)
    };

    match secs {
        Some(0) | None => Err(AppError::InvalidDuration(s.to_string())),
        Some(v) => Ok(v),
    }
}

fn parse_clock(s: &str) -> Option<u32> {
    let parts: Vec<&str> = s.split(':').collect();
    let nums: Vec<u32> = parts.iter().map(|p| p.parse().ok()).collect::<Option<_>>()?;

    match nums.as_slice() {
        [m, sec] if *sec < 60 => Some(m * 60 + sec),
        [h, m, sec] if *m < 60 && *sec < 60 => {
            h.checked_mul(3600)?.checked_add(m * 60 + sec)
        }
        _ => None,
    }
}

fn parse_suffixed(s: &str) -> Option<u32> {
    let mut total: u32 = 0;
    let mut num = String::new();
    let mut seen_unit = false;

    for ch in s.chars() {
        if ch.is_ascii_digit() {
            num.push(ch);
        } else {
            let value: u32 = num.parse().ok()?;
            num.clear();
            let mult = match ch.to_ascii_lowercase() {
                'h' => 3600,
                'm' => 60,
                's' => 1,
                _ => return None,
            };
            total = total.checked_add(value.checked_mul(mult)?)?;
            seen_unit = true;
        }
    }

    // trailing digits without a unit are rejected
    if !num.is_empty() || !seen_unit {
        return None;
    }
    Some(total)
}

/// `312` → `5:12`. Seconds are always two digits, minutes are not padded.
pub fn format_clock(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Compact hours-and-minutes form for totals: `5025` → `1h 23m`, `2700` → `45m`.
pub fn format_hm(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

/// Whole-minute phrase used in recommendation reasons: `660` → `11 minutes`.
pub fn format_minutes_phrase(secs: u32) -> String {
    let minutes = secs / 60;
    if minutes == 1 {
        "1 minute".to_string()
    } else {
        format!("{minutes} minutes")
    }
}
