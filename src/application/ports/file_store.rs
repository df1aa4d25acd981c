use std::io;

use bytes::Bytes;

#[async_trait::async_trait]
pub trait FileStore: Send + Sync {
    async fn put(&self, name: &str, data: Bytes) -> Result<u64, FileStoreError>;

    async fn fetch(&self, name: &str) -> Result<Vec<u8>, FileStoreError>;

    async fn delete(&self, name: &str) -> Result<(), FileStoreError>;

    async fn head(&self, name: &str) -> Result<u64, FileStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FileStoreError {
    #[error("write failed: {0}")]
    WriteFailed(String),
    #[error("object not found: {0}")]
    NotFound(String),
    #[error("read failed: {0}")]
    ReadFailed(String),
    #[error("delete failed: {0}")]
    DeleteFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
