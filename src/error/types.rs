//! Error types
//!
//! Defines domain-specific error types for each component of the toolkit.

use std::fmt;
use std::io;

/// Directory walking errors
#[derive(Debug)]
pub enum FileSystemError {
    NotFound(String),
    NotADirectory(String),
    PermissionDenied(String),
    Io { path: String, source: io::Error },
}

impl FileSystemError {
    /// Classifies an I/O error raised while touching `path`
    pub fn from_io(path: &str, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => FileSystemError::NotFound(path.to_string()),
            io::ErrorKind::PermissionDenied => FileSystemError::PermissionDenied(path.to_string()),
            _ => FileSystemError::Io {
                path: path.to_string(),
                source: error,
            },
        }
    }
}

impl fmt::Display for FileSystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileSystemError::NotFound(p) => write!(f, "Path not found: {}", p),
            FileSystemError::NotADirectory(p) => write!(f, "Not a directory: {}", p),
            FileSystemError::PermissionDenied(p) => write!(f, "Permission denied: {}", p),
            FileSystemError::Io { path, source } => write!(f, "IO error at {}: {}", path, source),
        }
    }
}

impl std::error::Error for FileSystemError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileSystemError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Storage module errors
#[derive(Debug)]
pub enum StorageError {
    InvalidArgument(String),
    IoError(io::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            StorageError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<io::Error> for StorageError {
    fn from(error: io::Error) -> Self {
        StorageError::IoError(error)
    }
}

/// Content reference resolution errors
#[derive(Debug)]
pub enum ResolveError {
    ResolverUnavailable,
    QueryFailed(String),
    MissingColumn(String),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::ResolverUnavailable => write!(f, "Content resolver unavailable"),
            ResolveError::QueryFailed(msg) => write!(f, "Content query failed: {}", msg),
            ResolveError::MissingColumn(c) => write!(f, "Column not present: {}", c),
        }
    }
}

impl std::error::Error for ResolveError {}

/// Errors surfaced by the host binary's maintenance pass
#[derive(Debug)]
pub enum ToolkitError {
    FileSystem(FileSystemError),
    Config(config::ConfigError),
    NoCacheDirectory,
    PurgeIncomplete { path: String, failures: usize },
    TaskFailed(String),
}

impl fmt::Display for ToolkitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolkitError::FileSystem(e) => write!(f, "File system error: {}", e),
            ToolkitError::Config(e) => write!(f, "Configuration error: {}", e),
            ToolkitError::NoCacheDirectory => write!(f, "No cache directory available"),
            ToolkitError::PurgeIncomplete { path, failures } => {
                write!(f, "Cache purge of {} left {} failures", path, failures)
            }
            ToolkitError::TaskFailed(e) => write!(f, "Background task failed: {}", e),
        }
    }
}

impl std::error::Error for ToolkitError {}

impl From<FileSystemError> for ToolkitError {
    fn from(error: FileSystemError) -> Self {
        ToolkitError::FileSystem(error)
    }
}

impl From<config::ConfigError> for ToolkitError {
    fn from(error: config::ConfigError) -> Self {
        ToolkitError::Config(error)
    }
}
