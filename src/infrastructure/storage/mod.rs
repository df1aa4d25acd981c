mod local_store;
mod mock_store;
mod store_factory;

pub use local_store::LocalFileStore;
pub use mock_store::MockFileStore;
pub use store_factory::{FileStoreFactory, FileStores};
