//! Host collaborator traits
//!
//! Capabilities the toolkit borrows from the embedding application. Tests and
//! alternative hosts supply their own implementations.

use std::io;
use std::path::{Path, PathBuf};

/// The owning application's private storage layout
pub trait HostContext {
    /// Identifier of the owning application
    fn package_name(&self) -> &str;

    /// Private internal cache location, if the host exposes one
    fn cache_dir(&self) -> Option<PathBuf>;

    /// Private persistent files area, if the host exposes one
    fn files_dir(&self) -> Option<PathBuf>;
}

/// Storage availability and free space reporting
pub trait StorageProbe {
    /// Whether removable/external storage is currently mounted
    fn is_external_mounted(&self) -> bool;

    /// Root of the external storage volume
    fn external_root(&self) -> Option<PathBuf>;

    /// Bytes available to unprivileged writers on the volume holding `path`
    fn available_bytes(&self, path: &Path) -> io::Result<u64>;
}
