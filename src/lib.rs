//! fsutil
//!
//! Filesystem helpers for a host application: cache directory resolution,
//! recursive delete and size aggregation, content reference resolution and
//! human readable sizes.
//!
//! Every operation is synchronous and blocks on filesystem I/O. Callers are
//! expected to run them off latency-sensitive threads, for example through
//! `tokio::task::spawn_blocking`. Nothing here locks: concurrent operations on
//! overlapping subtrees race.

pub mod cache;
pub mod config;
pub mod constants;
pub mod error;
pub mod format;
pub mod host;
pub mod maintenance;
pub mod reference;
pub mod storage;
pub mod utils;
pub mod walker;

pub use cache::{CacheDirResolver, CacheDirSpec, resolve_files_dir};
pub use format::format_size;
pub use reference::{ContentQuery, ContentReference, PathResolver};
pub use walker::{DeletionReport, recursive_delete, recursive_size};
