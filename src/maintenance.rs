//! Cache maintenance pass
//!
//! Measures the configured cache directory and purges its contents once usage
//! crosses the configured limit.

use log::{info, warn};
use std::path::PathBuf;

use crate::cache::{CacheDirResolver, CacheDirSpec};
use crate::config::ToolkitConfig;
use crate::error::ToolkitError;
use crate::format::format_size;
use crate::walker::{DeletionReport, SizeTotal, recursive_delete, recursive_size};

/// What a maintenance pass found and did
#[derive(Debug, Clone)]
pub struct MaintenanceOutcome {
    pub cache_dir: PathBuf,
    pub usage: SizeTotal,
    /// Present only when the cache was purged
    pub purge: Option<DeletionReport>,
}

impl MaintenanceOutcome {
    /// Fails when a purge ran but could not remove everything it was asked to
    pub fn purge_result(&self) -> Result<(), ToolkitError> {
        match self.purge {
            Some(report) if report.has_failures() => Err(ToolkitError::PurgeIncomplete {
                path: self.cache_dir.display().to_string(),
                failures: report.failures,
            }),
            _ => Ok(()),
        }
    }
}

/// Runs one maintenance pass. Blocks on filesystem I/O.
pub fn run_cache_maintenance(config: &ToolkitConfig) -> Result<MaintenanceOutcome, ToolkitError> {
    let host = config.host();
    let storage = config.storage();
    let resolver = CacheDirResolver::new(Some(&host), &storage);

    let spec = CacheDirSpec::new(config.owner_id.as_str(), config.cache_subdir.as_deref());
    let cache_dir = resolver.resolve(&spec).ok_or(ToolkitError::NoCacheDirectory)?;

    if !cache_dir.is_dir() {
        info!("Cache directory {} does not exist yet", cache_dir.display());
        return Ok(MaintenanceOutcome {
            cache_dir,
            usage: 0,
            purge: None,
        });
    }

    let usage = recursive_size(&cache_dir)?;
    let limit = config.cache_limit_bytes();
    info!(
        "Cache {} uses {} (limit {})",
        cache_dir.display(),
        format_size(usage),
        format_size(limit)
    );

    if usage <= limit {
        return Ok(MaintenanceOutcome {
            cache_dir,
            usage,
            purge: None,
        });
    }

    let report = recursive_delete(&cache_dir, false);
    if report.has_failures() {
        warn!(
            "Cache purge of {} finished with {} failures",
            cache_dir.display(),
            report.failures
        );
    } else {
        info!("Purged cache {}", cache_dir.display());
    }

    Ok(MaintenanceOutcome {
        cache_dir,
        usage,
        purge: Some(report),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::save;
    use tempfile::TempDir;

    fn config_for(dir: &TempDir, limit_mb: u64) -> ToolkitConfig {
        ToolkitConfig {
            owner_id: "com.example.app".into(),
            internal_root: dir.path().join("data").to_string_lossy().into_owned(),
            files_root: dir.path().join("files").to_string_lossy().into_owned(),
            external_root: None,
            cache_subdir: None,
            cache_limit_mb: limit_mb,
        }
    }

    #[test]
    fn test_missing_cache_is_reported_empty() {
        let dir = TempDir::new().unwrap();
        let outcome = run_cache_maintenance(&config_for(&dir, 1)).unwrap();

        assert_eq!(outcome.usage, 0);
        assert!(outcome.purge.is_none());
        assert_eq!(
            outcome.cache_dir,
            dir.path().join("data/com.example.app/cache")
        );
    }

    #[test]
    fn test_cache_under_limit_is_kept() {
        let dir = TempDir::new().unwrap();
        let config = config_for(&dir, 1);
        let cache = dir.path().join("data/com.example.app/cache");
        assert!(save(&cache.join("small.bin"), &[0u8; 512]));

        let outcome = run_cache_maintenance(&config).unwrap();
        assert_eq!(outcome.usage, 512);
        assert!(outcome.purge.is_none());
        assert!(cache.join("small.bin").exists());
    }

    #[test]
    fn test_cache_over_limit_is_purged() {
        let dir = TempDir::new().unwrap();
        let config = config_for(&dir, 1);
        let cache = dir.path().join("data/com.example.app/cache");
        assert!(save(&cache.join("big/blob.bin"), &vec![0u8; 2 * 1024 * 1024]));

        let outcome = run_cache_maintenance(&config).unwrap();
        assert_eq!(outcome.usage, 2 * 1024 * 1024);
        assert_eq!(outcome.purge, Some(DeletionReport::default()));
        assert!(cache.is_dir());
        assert!(!cache.join("big").exists());
        assert!(outcome.purge_result().is_ok());
    }

    #[test]
    fn test_purge_failures_become_an_error() {
        let mut outcome = MaintenanceOutcome {
            cache_dir: PathBuf::from("/cache"),
            usage: 4096,
            purge: None,
        };
        assert!(outcome.purge_result().is_ok());

        outcome.purge = Some(DeletionReport { failures: 2 });
        match outcome.purge_result() {
            Err(ToolkitError::PurgeIncomplete { path, failures }) => {
                assert_eq!(path, "/cache");
                assert_eq!(failures, 2);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
