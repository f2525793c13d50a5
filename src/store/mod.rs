pub mod audit;
pub mod sessions;
pub mod stats;

pub use sessions::SessionStore;
