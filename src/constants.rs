//! Shared constants

/// Bytes in one kibibyte
pub const K: u64 = 1024;
/// Bytes in one mebibyte
pub const M: u64 = K * K;
/// Bytes in one gibibyte
pub const G: u64 = K * M;
/// Bytes in one tebibyte
pub const T: u64 = K * G;

/// Scheme tag of references served by a content provider
pub const CONTENT_SCHEME: &str = "content";
/// Scheme tag of references that embed a filesystem path
pub const FILE_SCHEME: &str = "file";

/// Column holding the on-disk path of a provider row
pub const DATA_COLUMN: &str = "_data";

/// Name of the cache folder under an application's internal root
pub const INTERNAL_CACHE_DIR: &str = "cache";
