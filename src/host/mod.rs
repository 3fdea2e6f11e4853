//! Host platform collaborators
//!
//! Traits for the capabilities supplied by the embedding application, plus a
//! directory-backed implementation driven by configuration.

mod local;
mod traits;

pub use local::{DirectoryHost, MountedStorage};
pub use traits::{HostContext, StorageProbe};
