use serde::{Deserialize, Serialize};
use std::fmt;

/// How sure the engine is about a recommended duration.
///
/// The current rule set never produces `Low`; it exists because callers
/// and stored payloads treat confidence as a three-level scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Low => "low",
            Confidence::Medium => "medium",
            Confidence::High => "high",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Suggested duration for the next walk, with the reasoning behind it.
/// Computed fresh on every call and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    /// Recommended next duration in seconds, always inside the engine's
    /// configured duration bounds.
    #[serde(rename = "recommendedDuration")]
    pub recommended_duration: u32,
    /// Human-readable explanation shown to the user.
    pub reason: String,
    #[serde(rename = "confidenceLevel")]
    pub confidence: Confidence,
}
