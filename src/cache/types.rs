//! Cache directory request types

use crate::host::HostContext;

/// Request for a cache directory owned by an application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheDirSpec {
    pub owner_id: String,
    pub subdir: Option<String>,
}

impl CacheDirSpec {
    pub fn new(owner_id: impl Into<String>, subdir: Option<&str>) -> Self {
        Self {
            owner_id: owner_id.into(),
            subdir: subdir.map(str::to_string),
        }
    }

    /// Request on behalf of the host's own application
    pub fn for_host(host: &dyn HostContext, subdir: Option<&str>) -> Self {
        Self::new(host.package_name(), subdir)
    }

    /// Directory name used on external storage: the subdirectory when given,
    /// otherwise the owner identifier
    pub fn dir_name(&self) -> &str {
        match self.subdir.as_deref() {
            Some(subdir) if !subdir.is_empty() => subdir,
            _ => &self.owner_id,
        }
    }
}
