//! Walker operations
//!
//! Recursive delete and recursive size over a directory subtree. Both run
//! synchronously to completion and hold no state between calls.

use log::{debug, warn};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::FileSystemError;
use crate::walker::results::{DeletionReport, SizeTotal};

/// Lists the immediate children of a directory.
///
/// A listing failure yields an empty list, indistinguishable from a truly
/// empty directory.
pub fn list_children(dir: &Path) -> Vec<PathBuf> {
    match fs::read_dir(dir) {
        Ok(entries) => entries.flatten().map(|entry| entry.path()).collect(),
        Err(e) => {
            warn!("Failed to list directory {}: {}", dir.display(), e);
            Vec::new()
        }
    }
}

/// Deletes `root` and everything below it.
///
/// Files are removed outright. For a directory every child is removed
/// recursively, and the directory itself is removed only when
/// `delete_root_too` is set. An absent root is not an error.
///
/// Only failures at `root` itself are counted in the returned report. Failures
/// deeper in the tree are logged but not propagated, so a clean report does not
/// guarantee that every descendant is gone when the root is kept.
///
/// Symbolic links are removed as links; their targets are never followed.
pub fn recursive_delete(root: &Path, delete_root_too: bool) -> DeletionReport {
    let mut report = DeletionReport::default();

    let metadata = match fs::symlink_metadata(root) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("Nothing to delete at {}", root.display());
            return report;
        }
        Err(e) => {
            warn!("Cannot inspect {} for deletion: {}", root.display(), e);
            report.record_failure();
            return report;
        }
    };

    if !metadata.is_dir() {
        if let Err(e) = fs::remove_file(root) {
            warn!("Failed to delete file {}: {}", root.display(), e);
            report.record_failure();
        }
        return report;
    }

    let children = list_children(root);
    let mut child_failures = 0;
    for child in &children {
        if recursive_delete(child, true).has_failures() {
            child_failures += 1;
        }
    }
    if child_failures > 0 {
        warn!(
            "{} of {} entries under {} could not be deleted",
            child_failures,
            children.len(),
            root.display()
        );
    }

    if delete_root_too {
        if let Err(e) = fs::remove_dir(root) {
            warn!("Failed to delete directory {}: {}", root.display(), e);
            report.record_failure();
        }
    }

    debug!(
        "Deleted {} entries under {} (root kept: {})",
        children.len() - child_failures,
        root.display(),
        !delete_root_too
    );

    report
}

/// Sums the lengths of all regular files reachable under `root`.
///
/// A regular file root yields its own length. Fails when `root` itself cannot
/// be inspected or listed. Failures below the root are logged and the affected
/// subtree counts as zero, so the total may under-count.
///
/// Symbolic links are followed. Link cycles are not detected.
pub fn recursive_size(root: &Path) -> Result<SizeTotal, FileSystemError> {
    let display = root.display().to_string();

    let metadata = fs::metadata(root).map_err(|e| FileSystemError::from_io(&display, e))?;
    if metadata.is_file() {
        return Ok(metadata.len());
    }
    if !metadata.is_dir() {
        return Err(FileSystemError::NotADirectory(display));
    }

    let entries = fs::read_dir(root).map_err(|e| FileSystemError::from_io(&display, e))?;

    let mut total: SizeTotal = 0;
    for entry in entries {
        match entry {
            Ok(entry) => total = total.saturating_add(subtree_size(&entry.path())),
            Err(e) => warn!("Skipping unreadable entry under {}: {}", display, e),
        }
    }

    Ok(total)
}

fn subtree_size(path: &Path) -> SizeTotal {
    match recursive_size(path) {
        Ok(size) => size,
        // sockets, fifos, devices
        Err(FileSystemError::NotADirectory(_)) => 0,
        Err(e) => {
            warn!("Excluding {} from size total: {}", path.display(), e);
            0
        }
    }
}
