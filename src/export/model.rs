// src/export/model.rs

use crate::models::WalkSession;
use serde::Serialize;

/// Struttura "piatta" per export delle sessioni.
#[derive(Serialize, Clone, Debug)]
pub struct SessionExport {
    pub date: String,
    pub day: String,
    pub time: String,
    pub duration_secs: u32,
    pub completed: bool,
    pub gps_points: usize,
}

impl SessionExport {
    pub fn from_session(s: &WalkSession) -> Self {
        Self {
            date: s.date.to_rfc3339(),
            day: s.date_str(),
            time: s.local_time_str(),
            duration_secs: s.duration,
            completed: s.completed,
            gps_points: s.track_len(),
        }
    }
}

/// Header per CSV
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["date", "day", "time", "duration_secs", "completed", "gps_points"]
}

pub(crate) fn session_to_row(e: &SessionExport) -> Vec<String> {
    vec![
        e.date.clone(),
        e.day.clone(),
        e.time.clone(),
        e.duration_secs.to_string(),
        e.completed.to_string(),
        e.gps_points.to_string(),
    ]
}
