mod document_renderer;
mod file_loader;
mod file_store;
mod llm_client;

pub use document_renderer::{DocumentRenderer, RenderError};
pub use file_loader::{FileLoader, FileLoaderError};
pub use file_store::{FileStore, FileStoreError};
pub use llm_client::{LlmClient, LlmClientError};
