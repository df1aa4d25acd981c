use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use tower::ServiceExt;

use sowdoc::infrastructure::observability::{
    REQUEST_ID_HEADER, RequestId, TracingConfig, request_id_middleware, sanitize_prompt,
};
use sowdoc::presentation::Environment;
use sowdoc::presentation::config::LoggingSettings;

fn app() -> Router {
    Router::new()
        .route("/", get(|| async { "ok" }))
        .layer(axum::middleware::from_fn(request_id_middleware))
}

#[test]
fn given_blank_prompt_when_sanitizing_then_marks_empty() {
    assert_eq!(sanitize_prompt("   "), "[EMPTY]");
}

#[test]
fn given_long_prompt_when_sanitizing_then_truncates_on_char_boundary() {
    let prompt = "é".repeat(150);

    let sanitized = sanitize_prompt(&prompt);

    assert_eq!(sanitized, format!("{}... (150 chars total)", "é".repeat(100)));
}

#[test]
fn given_credentials_when_sanitizing_then_redacts_values() {
    let sanitized = sanitize_prompt("Authorization: Bearer abc123 password=hunter2&next=1");

    assert_eq!(
        sanitized,
        "Authorization: Bearer [REDACTED] password=[REDACTED]&next=1"
    );
}

#[test]
fn given_json_logging_enabled_when_building_tracing_config_then_uses_json() {
    let config =
        TracingConfig::from_settings(&LoggingSettings { enable_json: true }, Environment::Test);

    assert!(config.json_format);
    assert_eq!(config.environment, Environment::Test);
}

#[tokio::test]
async fn given_incoming_request_id_when_handling_then_echoes_it() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/")
                .header(REQUEST_ID_HEADER, "req-42")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[REQUEST_ID_HEADER], "req-42");
}

#[tokio::test]
async fn given_no_request_id_when_handling_then_mints_uuid() {
    let response = app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let minted = response.headers()[REQUEST_ID_HEADER].to_str().unwrap();
    assert!(uuid::Uuid::parse_str(minted).is_ok());
}

#[test]
fn given_blank_request_id_header_when_reading_then_mints_new_id() {
    let mut headers = axum::http::HeaderMap::new();
    headers.insert(REQUEST_ID_HEADER, "  ".parse().unwrap());

    let id = RequestId::from_headers(&headers);

    assert!(uuid::Uuid::parse_str(id.as_str()).is_ok());
}
