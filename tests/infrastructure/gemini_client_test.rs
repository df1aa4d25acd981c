use std::time::Duration;

use sowdoc::application::ports::{LlmClient, LlmClientError};
use sowdoc::infrastructure::llm::{DEFAULT_BASE_URL, GeminiClient, create_gemini_client};

use crate::support::settings_from;

#[tokio::test]
async fn given_empty_api_key_when_completing_then_reports_not_configured() {
    let client = GeminiClient::new(String::new(), "gemini-2.5-flash".to_string());

    let result = client.complete("Analyze this SOW").await;

    assert!(matches!(result, Err(LlmClientError::NotConfigured)));
    assert_eq!(client.model(), "gemini-2.5-flash");
}

#[tokio::test]
async fn given_unreachable_endpoint_when_completing_then_reports_request_failure() {
    let client = GeminiClient::new("test-key".to_string(), "gemini-2.5-flash".to_string())
        .with_base_url("http://127.0.0.1:9/")
        .with_timeout(Duration::from_secs(5))
        .unwrap();

    let result = client.complete("Analyze this SOW").await;

    assert!(matches!(result, Err(LlmClientError::ApiRequestFailed(_))));
}

#[test]
fn given_settings_when_creating_client_then_uses_configured_model() {
    let settings = settings_from(&[("GEMINI_MODEL", "gemini-2.5-pro")]);

    let client = create_gemini_client(&settings.llm).unwrap();

    assert_eq!(client.model(), "gemini-2.5-pro");
    assert_eq!(settings.llm.base_url, DEFAULT_BASE_URL);
}
