mod download;
mod error;
mod generate;
mod health;

pub use download::{DOCX_CONTENT_TYPE, download_handler};
pub use error::{ApiError, ErrorResponse};
pub use generate::{GenerateResponse, generate_handler};
pub use health::{HealthResponse, health_handler};
