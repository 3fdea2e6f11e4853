//! Walker result types
//!
//! Defines result structures returned by walker operations.

/// Outcome of a recursive delete
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeletionReport {
    /// Deletions that failed at the level the delete was requested on
    pub failures: usize,
}

impl DeletionReport {
    pub fn has_failures(&self) -> bool {
        self.failures > 0
    }

    pub(crate) fn record_failure(&mut self) {
        self.failures += 1;
    }
}

/// Sum of regular file lengths under a root, in bytes
pub type SizeTotal = u64;
