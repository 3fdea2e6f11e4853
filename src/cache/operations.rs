//! Cache directory resolution
//!
//! Tiered lookup: a directory on external storage while it is mounted, the
//! application's internal cache otherwise.

use log::{debug, info, warn};
use std::fs;
use std::path::PathBuf;

use crate::cache::types::CacheDirSpec;
use crate::host::{HostContext, StorageProbe};

/// Picks a cache directory for an application
pub struct CacheDirResolver<'a> {
    host: Option<&'a dyn HostContext>,
    storage: &'a dyn StorageProbe,
}

impl<'a> CacheDirResolver<'a> {
    pub fn new(host: Option<&'a dyn HostContext>, storage: &'a dyn StorageProbe) -> Self {
        Self { host, storage }
    }

    /// Resolves a cache directory, preferring external storage.
    ///
    /// Returns `None` when no host context is available. The external
    /// directory is created on demand, but a failed creation still yields its
    /// path, so callers must check that it exists before writing.
    pub fn resolve(&self, spec: &CacheDirSpec) -> Option<PathBuf> {
        if self.host.is_none() {
            debug!("No host context, cannot resolve cache directory");
            return None;
        }

        if let Some(dir) = self.external_cache_dir(spec) {
            return Some(dir);
        }

        self.internal_cache_dir()
    }

    /// Cache directory on external storage, if it is mounted
    pub fn external_cache_dir(&self, spec: &CacheDirSpec) -> Option<PathBuf> {
        self.host?;
        if !self.storage.is_external_mounted() {
            return None;
        }
        let root = self.storage.external_root()?;

        let dir = root.join(spec.dir_name());
        if !dir.exists() {
            match fs::create_dir_all(&dir) {
                Ok(()) => info!("Created external cache directory {}", dir.display()),
                Err(e) => warn!(
                    "Failed to create external cache directory {}: {}",
                    dir.display(),
                    e
                ),
            }
        }

        Some(dir)
    }

    /// The application's private internal cache location
    pub fn internal_cache_dir(&self) -> Option<PathBuf> {
        self.host?.cache_dir()
    }
}

/// Resolves a directory in the application's private persistent files area.
///
/// Without a subdirectory the files area itself is returned. A missing
/// subdirectory is created; a failed creation still yields its path.
pub fn resolve_files_dir(host: Option<&dyn HostContext>, subdir: Option<&str>) -> Option<PathBuf> {
    let files_dir = host?.files_dir()?;

    let subdir = match subdir {
        Some(subdir) if !subdir.is_empty() => subdir,
        _ => return Some(files_dir),
    };

    let dir = files_dir.join(subdir);
    if !dir.exists() {
        if let Err(e) = fs::create_dir_all(&dir) {
            warn!("Failed to create files directory {}: {}", dir.display(), e);
        }
    }

    Some(dir)
}
