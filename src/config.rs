//! Configuration management for fsutil
//!
//! Describes the host application's storage layout. Values come from an
//! optional `fsutil.toml` overlaid with `FSUTIL_*` environment variables.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

use crate::constants::M;
use crate::host::{DirectoryHost, MountedStorage};

/// Candidate config file locations, without extension
const CONFIG_PATHS: [&str; 2] = ["fsutil/fsutil", "fsutil"];

/// Complete toolkit configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ToolkitConfig {
    /// Identifier of the owning application
    /// Environment: FSUTIL_OWNER_ID
    pub owner_id: String,

    /// Root holding each application's internal cache
    pub internal_root: String,

    /// Private persistent files area
    pub files_root: String,

    /// External storage root; unset means no external storage
    pub external_root: Option<String>,

    /// Subdirectory requested from the cache resolver
    pub cache_subdir: Option<String>,

    /// Cache usage above which the maintenance pass purges the cache
    /// Environment: FSUTIL_CACHE_LIMIT_MB
    pub cache_limit_mb: u64,
}

impl ToolkitConfig {
    /// Load configuration from the config files found, with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("owner_id", "fsutil")?
            .set_default("internal_root", "./data")?
            .set_default("files_root", "./data/files")?
            .set_default("cache_limit_mb", 256)?;

        for config_path in CONFIG_PATHS {
            builder = builder.add_source(File::with_name(config_path).required(false));
        }

        let settings = builder
            .add_source(
                Environment::with_prefix("FSUTIL")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let config: ToolkitConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if self.owner_id.trim().is_empty() {
            return Err(ConfigError::Message("owner_id cannot be empty".into()));
        }

        if self.internal_root.is_empty() {
            return Err(ConfigError::Message("internal_root cannot be empty".into()));
        }

        if self.files_root.is_empty() {
            return Err(ConfigError::Message("files_root cannot be empty".into()));
        }

        if matches!(&self.external_root, Some(root) if root.is_empty()) {
            return Err(ConfigError::Message(
                "external_root must be omitted rather than empty".into(),
            ));
        }

        if self.cache_limit_mb == 0 {
            return Err(ConfigError::Message(
                "cache_limit_mb must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Host context described by this configuration
    pub fn host(&self) -> DirectoryHost {
        DirectoryHost {
            owner_id: self.owner_id.clone(),
            internal_root: PathBuf::from(&self.internal_root),
            files_root: PathBuf::from(&self.files_root),
        }
    }

    /// Storage probe described by this configuration
    pub fn storage(&self) -> MountedStorage {
        MountedStorage {
            external_root: self.external_root.as_ref().map(PathBuf::from),
        }
    }

    /// Cache limit in bytes
    pub fn cache_limit_bytes(&self) -> u64 {
        self.cache_limit_mb.saturating_mul(M)
    }
}
