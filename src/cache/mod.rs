//! Cache directory management
//!
//! Resolves cache and private files directories for the owning application.

mod operations;
mod types;

pub use operations::{CacheDirResolver, resolve_files_dir};
pub use types::CacheDirSpec;
