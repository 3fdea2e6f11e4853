//! Content references
//!
//! Parses scheme-tagged references and resolves them to filesystem paths.

mod operations;
mod types;

pub use operations::{ContentQuery, ContentTable, PathResolver};
pub use types::ContentReference;
