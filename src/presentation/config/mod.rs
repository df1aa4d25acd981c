mod environment;
mod settings;

pub use environment::{Environment, UnknownEnvironment};
pub use settings::{LlmSettings, LoggingSettings, ServerSettings, Settings, StorageSettings};
