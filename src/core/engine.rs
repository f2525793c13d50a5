//! Recommendation engine entry point.
//!
//! Every calculation is a pure function of the session history and a point
//! in time. The clock and the streak anchor are injected so results are
//! reproducible; the wrappers without a time argument read the system clock.

use crate::core::{progression, stats};
use crate::models::{ProgressStats, Recommendation, WalkSession};
use crate::utils::date;
use chrono::{DateTime, NaiveDate, Utc};

/// Tuning knobs of the progression rules.
///
/// The defaults are the values the algorithm was designed around and are
/// what the CLI always uses; the struct exists so the rules stay free of
/// process-wide constants and can be exercised with other values in tests.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Floor for any recommended duration, seconds.
    pub min_duration: u32,
    /// Ceiling for any recommended duration, seconds.
    pub max_duration: u32,
    /// Step up applied when progressing (0.10 = +10%).
    pub progression_rate: f64,
    /// Step down applied when regressing (0.10 = -10%).
    pub regression_rate: f64,
    /// Recent sessions needed before the rules will move the duration.
    pub min_sessions_for_progression: usize,
    /// Completion rate at or above which the engine may progress.
    pub completion_threshold: f64,
    /// Completion rate below which the engine regresses.
    pub regression_threshold: f64,
    /// Consistency score at or above which the engine may progress.
    pub consistency_threshold: f64,
    /// Length of the rolling recent window, days.
    pub recent_window_days: i64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_duration: 180,
            max_duration: 1800,
            progression_rate: 0.10,
            regression_rate: 0.10,
            min_sessions_for_progression: 3,
            completion_threshold: 0.80,
            regression_threshold: 0.50,
            consistency_threshold: 0.70,
            recent_window_days: 7,
        }
    }
}

pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Recommendation for the next walk, evaluated against the current time.
    pub fn recommend(&self, history: &[WalkSession]) -> Recommendation {
        self.recommend_at(history, Utc::now())
    }

    /// Recommendation for the next walk as of `now`.
    pub fn recommend_at(&self, history: &[WalkSession], now: DateTime<Utc>) -> Recommendation {
        progression::recommend(&self.config, history, now)
    }

    /// Progress statistics with the streak anchored to the current day.
    pub fn progress_stats(&self, history: &[WalkSession]) -> ProgressStats {
        self.progress_stats_at(history, date::today())
    }

    /// Progress statistics with the streak anchored to `today`.
    pub fn progress_stats_at(&self, history: &[WalkSession], today: NaiveDate) -> ProgressStats {
        stats::collect(history, today)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
