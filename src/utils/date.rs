//! Date helpers: local calendar dates, period parsing, timestamp parsing.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Whole days between two local calendar dates (`a - b`).
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    a.signed_duration_since(b).num_days()
}

/// Inclusive date bounds for a period expression.
///
/// Accepts `YYYY-MM-DD` (single day), `YYYY-MM` (whole month)
/// and `YYYY` (whole year).
pub fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    // YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(p, "%Y-%m-%d") {
        return Ok((d, d));
    }

    // YYYY-MM
    if let Ok(first) = NaiveDate::parse_from_str(&(p.to_string() + "-01"), "%Y-%m-%d") {
        return Ok((first, last_day_of_month(first.year(), first.month())));
    }

    // YYYY
    if let Ok(year) = p.parse::<i32>()
        && let (Some(start), Some(end)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31),
        )
    {
        return Ok((start, end));
    }

    Err(AppError::InvalidPeriod(p.to_string()))
}

/// Bounds for a range expression: `all`, a single period, or `START:END`
/// where both ends are period expressions. `None` means unbounded.
pub fn range_bounds(range: &str) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    if range.eq_ignore_ascii_case("all") {
        return Ok(None);
    }

    if let Some((a, b)) = range.split_once(':') {
        let (start, _) = period_bounds(a.trim())?;
        let (_, end) = period_bounds(b.trim())?;
        if end < start {
            return Err(AppError::InvalidPeriod(range.to_string()));
        }
        return Ok(Some((start, end)));
    }

    period_bounds(range).map(Some)
}

pub fn current_month_bounds() -> (NaiveDate, NaiveDate) {
    let today = today();
    let first = today.with_day(1).unwrap_or(today);
    (first, last_day_of_month(today.year(), today.month()))
}

pub fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let (ny, nm) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(ny, nm, 1)
        .and_then(|d| d.pred_opt())
        .unwrap_or_else(|| today())
}

/// Parses a session timestamp from the command line.
///
/// Accepts a full RFC 3339 timestamp, `YYYY-MM-DD HH:MM` in local time,
/// or a bare `YYYY-MM-DD` (interpreted as local noon).
pub fn parse_when(s: &str) -> AppResult<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M") {
        return local_to_utc(naive, s);
    }

    if let Some(d) = parse_date(s)
        && let Some(naive) = d.and_hms_opt(12, 0, 0)
    {
        return local_to_utc(naive, s);
    }

    Err(AppError::InvalidDate(s.to_string()))
}

fn local_to_utc(naive: NaiveDateTime, raw: &str) -> AppResult<DateTime<Utc>> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| AppError::InvalidDate(raw.to_string()))
}
