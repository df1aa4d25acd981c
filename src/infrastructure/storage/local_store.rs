use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{FileStore, FileStoreError};

/// Flat directory of named files backed by `object_store`'s local filesystem.
pub struct LocalFileStore {
    inner: Arc<LocalFileSystem>,
    base_path: PathBuf,
}

impl LocalFileStore {
    pub fn new(base_path: PathBuf) -> Result<Self, FileStoreError> {
        std::fs::create_dir_all(&base_path)?;
        let fs = LocalFileSystem::new_with_prefix(&base_path)
            .map_err(|e| FileStoreError::WriteFailed(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
            base_path,
        })
    }

    pub fn base_path(&self) -> &std::path::Path {
        &self.base_path
    }
}

fn not_found_or(
    name: &str,
    err: object_store::Error,
    other: fn(String) -> FileStoreError,
) -> FileStoreError {
    match err {
        object_store::Error::NotFound { .. } => FileStoreError::NotFound(name.to_string()),
        e => other(e.to_string()),
    }
}

#[async_trait::async_trait]
impl FileStore for LocalFileStore {
    async fn put(&self, name: &str, data: Bytes) -> Result<u64, FileStoreError> {
        let size = data.len() as u64;
        self.inner
            .put(&StorePath::from(name), PutPayload::from(data))
            .await
            .map_err(|e| FileStoreError::WriteFailed(e.to_string()))?;
        Ok(size)
    }

    async fn fetch(&self, name: &str) -> Result<Vec<u8>, FileStoreError> {
        let result = self
            .inner
            .get(&StorePath::from(name))
            .await
            .map_err(|e| not_found_or(name, e, FileStoreError::ReadFailed))?;

        let bytes = result
            .bytes()
            .await
            .map_err(|e| FileStoreError::ReadFailed(e.to_string()))?;

        Ok(bytes.to_vec())
    }

    async fn delete(&self, name: &str) -> Result<(), FileStoreError> {
        self.inner
            .delete(&StorePath::from(name))
            .await
            .map_err(|e| not_found_or(name, e, FileStoreError::DeleteFailed))
    }

    async fn head(&self, name: &str) -> Result<u64, FileStoreError> {
        let meta = self
            .inner
            .head(&StorePath::from(name))
            .await
            .map_err(|e| not_found_or(name, e, FileStoreError::ReadFailed))?;
        Ok(meta.size as u64)
    }
}
