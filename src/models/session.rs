use super::track::GpsPoint;
use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single recorded walking session.
///
/// The serde field names are the external schema of the persisted session
/// array (`date`, `duration`, `completed`, `gpsTrack`) and must not change:
/// files written by older exports of this data have to keep loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalkSession {
    /// Moment the session ended or was stopped (RFC 3339).
    pub date: DateTime<Utc>,
    /// Seconds actually walked.
    pub duration: u32,
    /// True iff `duration` reached the session target when recorded.
    pub completed: bool,
    /// Recorded GPS path, if tracking was on. Never inspected by the
    /// recommendation engine.
    #[serde(rename = "gpsTrack", skip_serializing_if = "Option::is_none")]
    pub gps_track: Option<Vec<GpsPoint>>,
}

impl WalkSession {
    pub fn new(date: DateTime<Utc>, duration: u32, completed: bool) -> Self {
        Self {
            date,
            duration,
            completed,
            gps_track: None,
        }
    }

    /// Calendar date of the session in the local timezone.
    pub fn local_date(&self) -> NaiveDate {
        self.date.with_timezone(&Local).date_naive()
    }

    pub fn local_time_str(&self) -> String {
        self.date.with_timezone(&Local).format("%H:%M").to_string()
    }

    pub fn date_str(&self) -> String {
        self.local_date().format("%Y-%m-%d").to_string()
    }

    /// Number of GPS samples attached to this session.
    pub fn track_len(&self) -> usize {
        self.gps_track.as_ref().map(Vec::len).unwrap_or(0)
    }
}
