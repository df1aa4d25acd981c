use std::collections::HashMap;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;
use crate::infrastructure::llm::DEFAULT_BASE_URL;

const BYTES_PER_MB: usize = 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub storage: StorageSettings,
    pub llm: LlmSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub upload_dir: String,
    pub output_dir: String,
    /// Upload limit in bytes.
    pub max_file_size: usize,
}

impl StorageSettings {
    /// The limit as shown to users, rounded down to whole megabytes.
    pub fn max_file_size_mb(&self) -> usize {
        self.max_file_size / BYTES_PER_MB
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmSettings {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub enable_json: bool,
}

impl Settings {
    /// Reads defaults, then `appsettings.{environment}`, then `APP__SECTION__KEY`
    /// variables, then the flat deployment variables such as `PORT`.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Self::from_vars(environment, std::env::vars().collect())
    }

    pub fn from_vars(
        environment: Environment,
        vars: HashMap<String, String>,
    ) -> Result<Self, ConfigError> {
        let flat = |key: &str| vars.get(key).filter(|v| !v.trim().is_empty()).cloned();
        let api_key = flat("GEMINI_API_KEY").or_else(|| flat("GOOGLE_API_KEY"));

        let configuration = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3001)?
            .set_default("storage.upload_dir", "uploads")?
            .set_default("storage.output_dir", "outputs")?
            .set_default("storage.max_file_size", 10 * BYTES_PER_MB as i64)?
            .set_default("llm.api_key", "")?
            .set_default("llm.model", "gemini-2.5-flash")?
            .set_default("llm.base_url", DEFAULT_BASE_URL)?
            .set_default("llm.temperature", 0.2)?
            .set_default("llm.max_output_tokens", 65_536)?
            .set_default("llm.timeout_secs", 300)?
            .set_default("logging.enable_json", false)?
            .add_source(
                File::with_name(&environment.settings_file()).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(vars.clone())),
            )
            .set_override_option("server.port", flat("PORT"))?
            .set_override_option("storage.upload_dir", flat("UPLOAD_DIR"))?
            .set_override_option("storage.output_dir", flat("OUTPUT_DIR"))?
            .set_override_option("storage.max_file_size", flat("MAX_FILE_SIZE"))?
            .set_override_option("llm.api_key", api_key)?
            .set_override_option("llm.model", flat("GEMINI_MODEL"))?
            .set_override_option("llm.base_url", flat("GEMINI_BASE_URL"))?
            .build()?;

        configuration.try_deserialize()
    }
}
