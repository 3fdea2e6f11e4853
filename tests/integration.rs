use std::fs;
use std::path::PathBuf;

use fsutil::constants::DATA_COLUMN;
use fsutil::error::FileSystemError;
use fsutil::host::{DirectoryHost, HostContext, MountedStorage};
use fsutil::reference::ContentTable;
use fsutil::storage::{self, has_capacity};
use fsutil::{
    CacheDirResolver, CacheDirSpec, PathResolver, format_size, recursive_delete, recursive_size,
    resolve_files_dir,
};
use tempfile::TempDir;

// Helper to lay out a host with internal, files and external roots
fn setup_host(dir: &TempDir) -> (DirectoryHost, MountedStorage) {
    let host = DirectoryHost {
        owner_id: "com.example.gallery".into(),
        internal_root: dir.path().join("data"),
        files_root: dir.path().join("files"),
    };
    let storage = MountedStorage {
        external_root: Some(dir.path().join("sdcard")),
    };
    (host, storage)
}

#[test]
fn test_cache_lifecycle_on_external_storage() {
    let dir = TempDir::new().unwrap();
    let (host, storage) = setup_host(&dir);
    fs::create_dir(dir.path().join("sdcard")).unwrap();

    let resolver = CacheDirResolver::new(Some(&host), &storage);
    let cache = resolver
        .resolve(&CacheDirSpec::for_host(&host, Some("thumbs")))
        .unwrap();
    assert_eq!(cache, dir.path().join("sdcard/thumbs"));
    assert!(cache.is_dir());

    assert!(storage::save(&cache.join("a.jpg"), &vec![1u8; 1024]));
    assert!(storage::save(&cache.join("2024/b.jpg"), &vec![2u8; 512]));
    assert!(storage::save(&cache.join("2024/03/c.jpg"), &vec![3u8; 1024 * 1024]));

    let usage = recursive_size(&cache).unwrap();
    assert_eq!(usage, 1024 + 512 + 1024 * 1024);
    assert_eq!(format_size(usage), "1.0M");

    let report = recursive_delete(&cache, false);
    assert!(!report.has_failures());
    assert!(cache.is_dir());
    assert_eq!(recursive_size(&cache).unwrap(), 0);

    let report = recursive_delete(&cache, true);
    assert!(!report.has_failures());
    assert!(!cache.exists());
    assert!(!recursive_delete(&cache, true).has_failures());
}

#[test]
fn test_cache_falls_back_to_internal_when_unmounted() {
    let dir = TempDir::new().unwrap();
    let (host, storage) = setup_host(&dir);

    let resolver = CacheDirResolver::new(Some(&host), &storage);
    let cache = resolver
        .resolve(&CacheDirSpec::for_host(&host, Some("thumbs")))
        .unwrap();

    assert_eq!(cache, host.cache_dir().unwrap());
    assert_eq!(cache, dir.path().join("data/com.example.gallery/cache"));
    assert!(!dir.path().join("sdcard").exists());
}

#[test]
fn test_files_dir_is_separate_from_cache() {
    let dir = TempDir::new().unwrap();
    let (host, _) = setup_host(&dir);

    let docs = resolve_files_dir(Some(&host), Some("docs")).unwrap();
    assert!(docs.is_dir());
    assert!(docs.starts_with(dir.path().join("files")));
}

#[test]
fn test_missing_paths_yield_sentinels() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing");

    assert_eq!(storage::read(&missing), None);
    assert_eq!(storage::read_to_string(&missing), None);
    assert!(!storage::is_file_exist(&missing));
    assert!(!storage::is_valid_file(&missing));
    assert_eq!(storage::filesystem::last_modified_millis(&missing), 0);
    assert!(!recursive_delete(&missing, true).has_failures());
    assert!(recursive_size(&missing).is_err());
}

#[cfg(unix)]
fn set_mode(path: &std::path::Path, mode: u32) {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode)).unwrap();
}

#[cfg(unix)]
#[test]
fn test_permission_denied_paths_yield_sentinels() {
    // Permission bits do not bind the superuser
    if unsafe { libc::geteuid() } == 0 {
        return;
    }
    let dir = TempDir::new().unwrap();
    let cache = dir.path().join("cache");
    let locked = cache.join("locked");
    assert!(storage::save(&locked.join("pinned.bin"), &[7u8; 64]));
    assert!(storage::save(&cache.join("loose.bin"), &[7u8; 32]));
    set_mode(&locked.join("pinned.bin"), 0o000);
    set_mode(&locked, 0o555);

    assert_eq!(storage::read(&locked.join("pinned.bin")), None);
    assert_eq!(storage::read_to_string(&locked.join("pinned.bin")), None);
    assert!(!storage::save(&locked.join("new.bin"), b"data"));

    let report = recursive_delete(&cache, false);
    assert_eq!(report.failures, 0);
    assert!(locked.join("pinned.bin").exists());
    assert!(!cache.join("loose.bin").exists());
    assert_eq!(recursive_delete(&cache, true).failures, 1);

    set_mode(&locked, 0o000);
    assert_eq!(recursive_size(&cache).unwrap(), 0);
    assert!(fsutil::walker::list_children(&locked).is_empty());
    assert!(matches!(
        recursive_size(&locked),
        Err(FileSystemError::PermissionDenied(_))
    ));

    set_mode(&locked, 0o755);
    set_mode(&locked.join("pinned.bin"), 0o644);
}

#[test]
fn test_resolve_references_to_paths() {
    let dir = TempDir::new().unwrap();
    let photo = dir.path().join("DCIM/photo.jpg");
    assert!(storage::save(&photo, b"jpeg"));

    let mut table = ContentTable::new();
    table.insert(
        "content://media/external/images/media/1",
        DATA_COLUMN,
        &photo.to_string_lossy(),
    );
    let resolver = PathResolver::new(Some(&table));

    let resolved = resolver
        .resolve_uri("content://media/external/images/media/1")
        .unwrap();
    assert_eq!(storage::read(&resolved).as_deref(), Some(&b"jpeg"[..]));

    assert_eq!(
        resolver.resolve_uri("file:///a/b.txt"),
        Some(PathBuf::from("/a/b.txt"))
    );
    assert_eq!(resolver.resolve_uri("content://media/external/images/media/2"), None);
}

#[cfg(unix)]
#[test]
fn test_capacity_on_real_volume() {
    let dir = TempDir::new().unwrap();
    let (_, storage) = setup_host(&dir);

    assert!(has_capacity(&storage, dir.path(), 0).is_ok());
    assert!(has_capacity(&storage, std::path::Path::new(""), 0).is_err());
    assert!(has_capacity(&storage, &dir.path().join("absent"), 0).is_err());
    assert!(!has_capacity(&storage, dir.path(), u64::MAX).unwrap());
}
