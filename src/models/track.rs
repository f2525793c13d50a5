use serde::{Deserialize, Serialize};

/// A single GPS sample in a session track.
///
/// `timestamp` is epoch milliseconds, matching the format in which tracks
/// are exchanged with map tooling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GpsPoint {
    pub lat: f64,
    pub lng: f64,
    pub timestamp: i64,
}

impl GpsPoint {
    pub fn new(lat: f64, lng: f64, timestamp: i64) -> Self {
        Self {
            lat,
            lng,
            timestamp,
        }
    }

    /// True when latitude and longitude are inside the valid WGS84 ranges.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}
