//! Free space checks

use log::debug;
use std::path::Path;

use crate::error::StorageError;
use crate::host::StorageProbe;

/// Whether the volume holding `path` has strictly more than `size` bytes free.
///
/// Unlike the other storage helpers this raises instead of defaulting: an
/// empty path is an `InvalidArgument`, and a path the probe cannot inspect is
/// an I/O error.
pub fn has_capacity(probe: &dyn StorageProbe, path: &Path, size: u64) -> Result<bool, StorageError> {
    if path.as_os_str().is_empty() {
        return Err(StorageError::InvalidArgument("path is empty".into()));
    }

    let available = probe.available_bytes(path)?;
    debug!(
        "{} bytes available at {}, {} requested",
        available,
        path.display(),
        size
    );

    Ok(available > size)
}
