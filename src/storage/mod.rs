//! File storage helpers
//!
//! Handles file predicates, byte buffer I/O, capacity checks and name helpers.

pub mod capacity;
pub mod filesystem;
pub mod names;

// Re-export commonly used helpers
pub use capacity::has_capacity;
pub use filesystem::{is_file_exist, is_valid_file, read, read_to_string, save};
