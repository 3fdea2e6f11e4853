//! Local filesystem host
//!
//! Host collaborators backed by plain directories, as described by the
//! toolkit configuration.

use log::debug;
use std::io;
use std::path::{Path, PathBuf};

use crate::constants::INTERNAL_CACHE_DIR;
use crate::host::traits::{HostContext, StorageProbe};

/// Application storage rooted at configured directories
#[derive(Debug, Clone)]
pub struct DirectoryHost {
    pub owner_id: String,
    pub internal_root: PathBuf,
    pub files_root: PathBuf,
}

impl HostContext for DirectoryHost {
    fn package_name(&self) -> &str {
        &self.owner_id
    }

    fn cache_dir(&self) -> Option<PathBuf> {
        Some(
            self.internal_root
                .join(&self.owner_id)
                .join(INTERNAL_CACHE_DIR),
        )
    }

    fn files_dir(&self) -> Option<PathBuf> {
        Some(self.files_root.clone())
    }
}

/// External volume that counts as mounted while its root directory exists
#[derive(Debug, Clone, Default)]
pub struct MountedStorage {
    pub external_root: Option<PathBuf>,
}

impl StorageProbe for MountedStorage {
    fn is_external_mounted(&self) -> bool {
        match &self.external_root {
            Some(root) => {
                let mounted = root.is_dir();
                debug!("External storage {} mounted: {}", root.display(), mounted);
                mounted
            }
            None => false,
        }
    }

    fn external_root(&self) -> Option<PathBuf> {
        self.external_root.clone()
    }

    fn available_bytes(&self, path: &Path) -> io::Result<u64> {
        statvfs_available(path)
    }
}

/// Available blocks times fragment size, as reported by `statvfs(3)`
#[cfg(unix)]
#[allow(clippy::unnecessary_cast)] // statvfs field widths differ across platforms
fn statvfs_available(path: &Path) -> io::Result<u64> {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let c_path = CString::new(path.as_os_str().as_bytes())
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "path contains a NUL byte"))?;

    unsafe {
        let mut stat = std::mem::zeroed::<libc::statvfs>();
        if libc::statvfs(c_path.as_ptr(), &mut stat) != 0 {
            return Err(io::Error::last_os_error());
        }
        Ok((stat.f_bavail as u64).saturating_mul(stat.f_frsize as u64))
    }
}

#[cfg(not(unix))]
fn statvfs_available(_path: &Path) -> io::Result<u64> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "free space query is only available on unix",
    ))
}
