//! Error handlers
//!
//! Provides error reporting for the host binary.

use crate::error::types::ToolkitError;
use log::error;

/// Handle a toolkit error
pub fn handle_error(err: &ToolkitError) {
    error!("fsutil error: {}", err);
}

/// Convert error to a process exit code
pub fn error_to_exit_code(err: &ToolkitError) -> i32 {
    match err {
        ToolkitError::Config(_) => 78,
        ToolkitError::NoCacheDirectory => 69,
        ToolkitError::FileSystem(_) => 74,
        ToolkitError::PurgeIncomplete { .. } => 74,
        ToolkitError::TaskFailed(_) => 70,
    }
}
