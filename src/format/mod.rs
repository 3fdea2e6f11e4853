//! Display formatting
//!
//! Converts raw values produced by the walker into display strings.

mod size;

pub use size::format_size;
