//! File system operations
//!
//! Predicates, metadata and whole-file byte buffer helpers. Every function
//! here follows the silent-default policy: failures are logged and surface as
//! `false`, `0` or `None`.

use log::{debug, warn};
use std::fs::{self, File};
use std::io::{BufWriter, Read, Result, Write};
use std::path::Path;
use std::time::UNIX_EPOCH;

/// Create a directory and any missing parents
pub fn create_directory(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
}

/// Check if a regular file exists at `path`
pub fn is_file_exist(path: &Path) -> bool {
    !path.as_os_str().is_empty() && path.is_file()
}

/// Check if a directory exists at `path`
pub fn is_directory(path: &Path) -> bool {
    !path.as_os_str().is_empty() && path.is_dir()
}

/// Check if `path` is a regular file with content
pub fn is_valid_file(path: &Path) -> bool {
    is_file_exist(path) && fs::metadata(path).map(|m| m.len() > 0).unwrap_or(false)
}

/// Last modification time of a regular file in milliseconds since the Unix
/// epoch, or `0` if it cannot be determined
pub fn last_modified_millis(path: &Path) -> u64 {
    if !is_file_exist(path) {
        return 0;
    }

    fs::metadata(path)
        .and_then(|metadata| metadata.modified())
        .ok()
        .and_then(|time| time.duration_since(UNIX_EPOCH).ok())
        .map(|dur| dur.as_millis() as u64)
        .unwrap_or(0)
}

/// Reads the full contents of a non-empty regular file
pub fn read(path: &Path) -> Option<Vec<u8>> {
    if !is_valid_file(path) {
        debug!("Not reading {}: not a non-empty file", path.display());
        return None;
    }

    let mut buffer = Vec::new();
    let outcome = File::open(path).and_then(|mut file| file.read_to_end(&mut buffer));
    match outcome {
        Ok(_) => Some(buffer),
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            None
        }
    }
}

/// Reads a file as text, replacing invalid UTF-8 sequences
pub fn read_to_string(path: &Path) -> Option<String> {
    read(path).map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
}

/// Writes `data` to `path`, creating missing parent directories.
///
/// Returns `false` if any step fails; a partially written file may remain.
pub fn save(path: &Path, data: &[u8]) -> bool {
    match write_all(path, data) {
        Ok(()) => {
            debug!("Saved {} bytes to {}", data.len(), path.display());
            true
        }
        Err(e) => {
            warn!("Failed to save {}: {}", path.display(), e);
            false
        }
    }
}

fn write_all(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut out = BufWriter::new(File::create(path)?);
    out.write_all(data)?;
    out.flush()
}
