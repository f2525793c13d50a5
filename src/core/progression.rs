//! Decision rules for the next-walk duration.
//!
//! The rules look at a rolling window over the most recent days and move
//! the duration up, down, or not at all based on how reliably recent
//! sessions were completed and on how many distinct days they fall on.

use crate::core::engine::EngineConfig;
use crate::models::{Confidence, Recommendation, WalkSession};
use crate::utils::duration::format_minutes_phrase;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use std::collections::{BTreeMap, HashSet};

/// Recommendation for the next walk as of `now`.
///
/// The history is taken as given: the caller keeps it in chronological
/// order and the last element is treated as the most recent session. The
/// rules never re-sort and never mutate.
pub fn recommend(
    cfg: &EngineConfig,
    history: &[WalkSession],
    now: DateTime<Utc>,
) -> Recommendation {
    if history.is_empty() {
        return result(
            cfg,
            cfg.min_duration,
            "Starting with a gentle 3-minute walk".to_string(),
            Confidence::High,
        );
    }

    let recent = recent_sessions(history, now, cfg.recent_window_days);
    let last = &history[history.len() - 1];

    if recent.len() < cfg.min_sessions_for_progression {
        return result(
            cfg,
            last.duration,
            "Continue with current duration to build consistency".to_string(),
            Confidence::Medium,
        );
    }

    let completion_rate = completion_rate(&recent);
    let consistency = consistency_score(&recent, cfg.recent_window_days);
    let current = most_common_duration(&recent, cfg.min_duration);

    if completion_rate >= cfg.completion_threshold && consistency >= cfg.consistency_threshold {
        let grown = (current as f64 * (1.0 + cfg.progression_rate)).round() as u32;
        let candidate = grown.min(cfg.max_duration);
        if candidate > current {
            return result(
                cfg,
                candidate,
                format!("Great progress! Ready for {}", format_minutes_phrase(candidate)),
                Confidence::High,
            );
        }
        // already at the ceiling: fall through to the remaining rules
    }

    if completion_rate < cfg.regression_threshold {
        let shrunk = (current as f64 * (1.0 - cfg.regression_rate)).round() as u32;
        let candidate = shrunk.max(cfg.min_duration);
        return result(
            cfg,
            candidate,
            "Let's try a shorter duration to build confidence".to_string(),
            Confidence::Medium,
        );
    }

    result(
        cfg,
        current,
        "Keep building consistency at this level".to_string(),
        Confidence::Medium,
    )
}

// Every branch goes through here so the duration bounds hold no matter
// which rule produced the value or what the stored history contains.
fn result(
    cfg: &EngineConfig,
    duration: u32,
    reason: String,
    confidence: Confidence,
) -> Recommendation {
    Recommendation {
        recommended_duration: duration.clamp(cfg.min_duration, cfg.max_duration),
        reason,
        confidence,
    }
}

/// Sessions inside the rolling window of `days` ending at `now`, inclusive.
/// The window is 7×24h, not calendar-aligned.
fn recent_sessions<'a>(
    history: &'a [WalkSession],
    now: DateTime<Utc>,
    days: i64,
) -> Vec<&'a WalkSession> {
    let cutoff = now - Duration::days(days);
    history.iter().filter(|s| s.date >= cutoff).collect()
}

fn completion_rate(recent: &[&WalkSession]) -> f64 {
    if recent.is_empty() {
        return 0.0;
    }
    let completed = recent.iter().filter(|s| s.completed).count();
    completed as f64 / recent.len() as f64
}

/// Distinct local calendar dates in `recent`, over the window length.
///
/// Deliberately unclamped: session times near the window boundary can put
/// one more distinct date in the window than it has whole days, pushing
/// the score past 1.0.
fn consistency_score(recent: &[&WalkSession], window_days: i64) -> f64 {
    if recent.is_empty() {
        return 0.0;
    }
    let distinct: HashSet<NaiveDate> = recent.iter().map(|s| s.local_date()).collect();
    distinct.len() as f64 / window_days as f64
}

/// Most frequent duration in `recent`; the smallest duration wins ties so
/// the answer never depends on map iteration order.
fn most_common_duration(recent: &[&WalkSession], fallback: u32) -> u32 {
    let mut freq: BTreeMap<u32, usize> = BTreeMap::new();
    for s in recent {
        *freq.entry(s.duration).or_default() += 1;
    }

    let mut best = (fallback, 0usize);
    for (duration, count) in freq {
        if count > best.1 {
            best = (duration, count);
        }
    }
    best.0
}
