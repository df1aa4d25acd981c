use bytes::Bytes;
use tempfile::TempDir;

use sowdoc::application::ports::{FileStore, FileStoreError};
use sowdoc::infrastructure::storage::{FileStoreFactory, LocalFileStore};

use crate::support::settings_from;

#[tokio::test]
async fn given_stored_file_when_reading_back_then_returns_same_bytes() {
    let dir = TempDir::new().unwrap();
    let store = LocalFileStore::new(dir.path().join("outputs")).unwrap();

    let written = store
        .put("report.docx", Bytes::from_static(b"docx bytes"))
        .await
        .unwrap();

    assert_eq!(written, 10);
    assert_eq!(store.head("report.docx").await.unwrap(), 10);
    assert_eq!(store.fetch("report.docx").await.unwrap(), b"docx bytes");
    assert!(dir.path().join("outputs").join("report.docx").exists());
}

#[tokio::test]
async fn given_deleted_file_when_fetching_then_reports_not_found() {
    let dir = TempDir::new().unwrap();
    let store = LocalFileStore::new(dir.path().to_path_buf()).unwrap();
    store
        .put("upload.txt", Bytes::from_static(b"sow"))
        .await
        .unwrap();

    store.delete("upload.txt").await.unwrap();

    assert!(matches!(
        store.fetch("upload.txt").await,
        Err(FileStoreError::NotFound(name)) if name == "upload.txt"
    ));
    assert!(matches!(
        store.head("upload.txt").await,
        Err(FileStoreError::NotFound(_))
    ));
}

#[tokio::test]
async fn given_storage_settings_when_creating_stores_then_directories_exist() {
    let dir = TempDir::new().unwrap();
    let uploads = dir.path().join("up");
    let outputs = dir.path().join("out");
    let settings = settings_from(&[
        ("UPLOAD_DIR", uploads.to_str().unwrap()),
        ("OUTPUT_DIR", outputs.to_str().unwrap()),
    ]);

    let stores = FileStoreFactory::create(&settings.storage).unwrap();
    stores
        .outputs
        .put("a.docx", Bytes::from_static(b"x"))
        .await
        .unwrap();

    assert!(uploads.is_dir());
    assert!(outputs.join("a.docx").is_file());
}
