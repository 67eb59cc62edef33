use std::fs;
use tempfile::TempDir;
use todoapp::store::backend::BlobBackend;
use todoapp::store::fs_backend::FsBackend;
use todoapp::store::StoreKey;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().join("store"));
    (dir, backend)
}

#[test]
fn test_fs_backend_missing_blob_is_none() {
    let (_dir, backend) = setup();
    let blob = backend.read_blob(&StoreKey::default()).unwrap();
    assert_eq!(blob, None);
}

#[test]
fn test_fs_backend_write_then_read() {
    let (_dir, backend) = setup();
    let key = StoreKey::default();

    backend.write_blob(&key, "[]").unwrap();
    assert_eq!(backend.read_blob(&key).unwrap(), Some("[]".to_string()));

    // Overwrite, not append
    backend.write_blob(&key, "[1]").unwrap();
    assert_eq!(backend.read_blob(&key).unwrap(), Some("[1]".to_string()));
}

#[test]
fn test_fs_backend_creates_root_on_write() {
    let (dir, backend) = setup();
    assert!(!dir.path().join("store").exists());

    backend.write_blob(&StoreKey::default(), "[]").unwrap();
    assert!(dir.path().join("store").join("todos.json").exists());
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (_dir, backend) = setup();
    backend.write_blob(&StoreKey::default(), "Atomic").unwrap();

    // Verify NO .tmp files are left behind
    for entry in fs::read_dir(backend.root()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_keys_are_separate_files() {
    let (_dir, backend) = setup();
    let work = StoreKey::new("work").unwrap();
    let home = StoreKey::new("home").unwrap();

    backend.write_blob(&work, "work").unwrap();
    backend.write_blob(&home, "home").unwrap();

    assert_eq!(backend.read_blob(&work).unwrap().as_deref(), Some("work"));
    assert_eq!(backend.read_blob(&home).unwrap().as_deref(), Some("home"));
    assert_eq!(backend.blob_path(&work), backend.root().join("work.json"));
}

#[test]
fn test_fs_backend_write_into_file_path_fails() {
    let dir = TempDir::new().unwrap();
    let not_a_dir = dir.path().join("plain-file");
    fs::write(&not_a_dir, "x").unwrap();

    let backend = FsBackend::new(not_a_dir);
    assert!(backend.write_blob(&StoreKey::default(), "[]").is_err());
}
