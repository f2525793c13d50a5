use serde::{Deserialize, Serialize};

/// Aggregate statistics over the whole session history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressStats {
    #[serde(rename = "totalSessions")]
    pub total_sessions: usize,
    #[serde(rename = "completedSessions")]
    pub completed_sessions: usize,
    /// Sum of all session durations, completed or not, in seconds.
    #[serde(rename = "totalWalkingTime")]
    pub total_walking_time: u64,
    /// Mean duration over completed sessions only, rounded to the nearest
    /// second. Zero when no session has been completed.
    #[serde(rename = "averageDuration")]
    pub average_duration: u32,
    /// Consecutive local calendar days, ending today or yesterday, with at
    /// least one completed session.
    #[serde(rename = "currentStreak")]
    pub current_streak: u32,
}

impl ProgressStats {
    /// Completed sessions as a share of all sessions, in [0, 1].
    pub fn completion_rate(&self) -> f64 {
        if self.total_sessions == 0 {
            0.0
        } else {
            self.completed_sessions as f64 / self.total_sessions as f64
        }
    }
}
