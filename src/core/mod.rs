pub mod add;
pub mod backup;
pub mod del;
pub mod engine;
pub mod log;
pub mod progression;
pub mod stats;

pub use engine::{Engine, EngineConfig};
