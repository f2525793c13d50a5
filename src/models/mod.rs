pub mod recommendation;
pub mod session;
pub mod stats;
pub mod track;

pub use recommendation::{Confidence, Recommendation};
pub use session::WalkSession;
pub use stats::ProgressStats;
pub use track::GpsPoint;
