pub mod colors;
pub mod date;
pub mod duration;
pub mod formatting;
pub mod path;
pub mod table;

// Re-export per compatibilità con il vecchio codice
pub use duration::format_clock;
pub use duration::format_hm;
