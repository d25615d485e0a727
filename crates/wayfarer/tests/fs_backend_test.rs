use std::fs;
use tempfile::TempDir;
use wayfarer::model::ListDocument;
use wayfarer::store::backend::StorageBackend;
use wayfarer::store::fs_backend::FsBackend;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().join("lists.json"));
    (dir, backend)
}

#[test]
fn test_fs_backend_missing_document_is_empty() {
    let (_dir, backend) = setup();
    let lists = backend.load_lists().unwrap();
    assert!(lists.is_empty());
}

#[test]
fn test_fs_backend_empty_file_is_empty_document() {
    let (dir, backend) = setup();
    fs::write(dir.path().join("lists.json"), "  \n").unwrap();
    assert!(backend.load_lists().unwrap().is_empty());
}

#[test]
fn test_fs_backend_document_io() {
    let (_dir, backend) = setup();

    let mut lists = ListDocument::new();
    lists.insert("Europe".to_string(), vec![3, 1, 2]);
    lists.insert("Beaches".to_string(), vec![]);

    backend.save_lists(&lists).unwrap();

    let loaded = backend.load_lists().unwrap();
    assert_eq!(loaded, lists);
    assert_eq!(loaded["Europe"], vec![3, 1, 2]);
}

#[test]
fn test_fs_backend_writes_plain_json_object() {
    let (dir, backend) = setup();

    let mut lists = ListDocument::new();
    lists.insert("Trip".to_string(), vec![5]);
    backend.save_lists(&lists).unwrap();

    let on_disk = fs::read_to_string(dir.path().join("lists.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&on_disk).unwrap();
    assert_eq!(value, serde_json::json!({ "Trip": [5] }));
}

#[test]
fn test_fs_backend_reads_document_written_elsewhere() {
    let (dir, backend) = setup();
    fs::write(
        dir.path().join("lists.json"),
        r#"{ "Summer": [4, 3], "Winter": [5] }"#,
    )
    .unwrap();

    let lists = backend.load_lists().unwrap();
    assert_eq!(lists["Summer"], vec![4, 3]);
    assert_eq!(lists["Winter"], vec![5]);
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (dir, backend) = setup();

    let mut lists = ListDocument::new();
    lists.insert("Atomic".to_string(), vec![1]);
    backend.save_lists(&lists).unwrap();
    lists.insert("Again".to_string(), vec![2]);
    backend.save_lists(&lists).unwrap();

    // Verify NO .tmp files are left behind
    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("data").join("lists.json");
    let backend = FsBackend::new(path.clone());

    backend.save_lists(&ListDocument::new()).unwrap();
    assert!(path.exists());
    assert_eq!(backend.document_path(), path);
}

#[test]
fn test_fs_backend_corrupt_document_is_an_error() {
    let (dir, backend) = setup();
    fs::write(dir.path().join("lists.json"), "{ not json").unwrap();
    assert!(backend.load_lists().is_err());
}

#[test]
fn test_fs_backend_failed_rename_leaves_no_tmp_file() {
    let (dir, backend) = setup();
    // a non-empty directory where the document should be makes rename fail
    let blocker = dir.path().join("lists.json");
    fs::create_dir(&blocker).unwrap();
    fs::write(blocker.join("keep"), "x").unwrap();

    let mut lists = ListDocument::new();
    lists.insert("Lost".to_string(), vec![1]);
    assert!(backend.save_lists(&lists).is_err());

    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}
