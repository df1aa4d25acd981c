use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use bytes::Bytes;

use crate::application::ports::{FileStore, FileStoreError};

/// In-memory store that records how often it was touched.
#[derive(Default)]
pub struct MockFileStore {
    files: Mutex<HashMap<String, Bytes>>,
    calls: AtomicUsize,
}

impl MockFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of port calls made so far, of any kind.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .files
            .lock()
            .map(|files| files.keys().cloned().collect())
            .unwrap_or_default();
        names.sort();
        names
    }

    pub fn is_empty(&self) -> bool {
        self.names().is_empty()
    }

    fn files(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<String, Bytes>>, FileStoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.files
            .lock()
            .map_err(|e| FileStoreError::ReadFailed(e.to_string()))
    }
}

#[async_trait::async_trait]
impl FileStore for MockFileStore {
    async fn put(&self, name: &str, data: Bytes) -> Result<u64, FileStoreError> {
        let size = data.len() as u64;
        self.files()?.insert(name.to_string(), data);
        Ok(size)
    }

    async fn fetch(&self, name: &str) -> Result<Vec<u8>, FileStoreError> {
        self.files()?
            .get(name)
            .map(|data| data.to_vec())
            .ok_or_else(|| FileStoreError::NotFound(name.to_string()))
    }

    async fn delete(&self, name: &str) -> Result<(), FileStoreError> {
        self.files()?
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| FileStoreError::NotFound(name.to_string()))
    }

    async fn head(&self, name: &str) -> Result<u64, FileStoreError> {
        self.files()?
            .get(name)
            .map(|data| data.len() as u64)
            .ok_or_else(|| FileStoreError::NotFound(name.to_string()))
    }
}
