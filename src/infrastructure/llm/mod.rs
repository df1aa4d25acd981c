mod gemini_client;
mod mock_llm_client;

pub use gemini_client::{DEFAULT_BASE_URL, GeminiClient, create_gemini_client};
pub use mock_llm_client::MockLlmClient;
