use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{FileStore, FileStoreError};
use crate::presentation::config::StorageSettings;

use super::local_store::LocalFileStore;

/// The two directories a server works with.
pub struct FileStores {
    pub uploads: Arc<dyn FileStore>,
    pub outputs: Arc<dyn FileStore>,
}

pub struct FileStoreFactory;

impl FileStoreFactory {
    pub fn create(settings: &StorageSettings) -> Result<FileStores, FileStoreError> {
        let uploads = LocalFileStore::new(PathBuf::from(&settings.upload_dir))?;
        let outputs = LocalFileStore::new(PathBuf::from(&settings.output_dir))?;
        tracing::info!(
            uploads = %uploads.base_path().display(),
            outputs = %outputs.base_path().display(),
            "File stores ready"
        );
        Ok(FileStores {
            uploads: Arc::new(uploads),
            outputs: Arc::new(outputs),
        })
    }
}
