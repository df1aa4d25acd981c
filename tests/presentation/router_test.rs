use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use sowdoc::application::services::GenerationService;
use sowdoc::infrastructure::llm::MockLlmClient;
use sowdoc::infrastructure::rendering::DocxRenderer;
use sowdoc::infrastructure::storage::MockFileStore;
use sowdoc::infrastructure::text_processing::MockFileLoader;
use sowdoc::presentation::handlers::DOCX_CONTENT_TYPE;
use sowdoc::presentation::{AppState, create_router};

use crate::support::{BOUNDARY, Part, multipart_body, settings_from};

const PROJECT_DETAILS: &str =
    r#"{"projectName":"Acme Migration","clientName":"Acme Corp","authorName":"Jane Architect"}"#;

struct TestApp {
    router: Router,
    uploads: Arc<MockFileStore>,
    outputs: Arc<MockFileStore>,
}

fn test_app() -> TestApp {
    let uploads = Arc::new(MockFileStore::new());
    let outputs = Arc::new(MockFileStore::new());
    let service = GenerationService::new(
        Arc::new(MockFileLoader),
        Arc::new(MockLlmClient::failing()),
        Arc::new(DocxRenderer::new()),
        uploads.clone(),
        outputs.clone(),
    );
    let state = AppState::new(Arc::new(service), settings_from(&[]));

    TestApp {
        router: create_router(state),
        uploads,
        outputs,
    }
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn generate_request(parts: &[Part<'_>]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/generate")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(parts)))
        .unwrap()
}

fn valid_parts<'a>(file: &'a [u8]) -> Vec<Part<'a>> {
    vec![
        Part::File("sowFile", "sow.txt", file),
        Part::Text("platform", "aws"),
        Part::Text("documentType", "hld"),
        Part::Text("projectDetails", PROJECT_DETAILS),
    ]
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn given_running_server_when_checking_health_then_reports_ok() {
    let app = test_app();

    let response = app.router.oneshot(get("/api/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
    assert!(body["uptime"].as_f64().unwrap() >= 0.0);
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn given_traversal_filename_when_downloading_then_rejects_before_touching_storage() {
    for uri in [
        "/api/download/..%2F..%2Fetc%2Fpasswd",
        "/api/download/a%5Cb.docx",
        "/api/download/..secret.docx",
    ] {
        let app = test_app();

        let response = app.router.oneshot(get(uri)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        let body = json_body(response).await;
        assert_eq!(body["error"], "Invalid filename");
        assert_eq!(body["success"], false);
        assert_eq!(app.outputs.calls(), 0);
    }
}

#[tokio::test]
async fn given_unknown_output_when_downloading_then_returns_not_found() {
    let app = test_app();

    let response = app
        .router
        .oneshot(get("/api/download/missing.docx"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response).await;
    assert_eq!(body["error"], "File not found");
    assert_eq!(body["type"], "NotFound");
}

#[tokio::test]
async fn given_valid_upload_when_generating_then_document_is_downloadable() {
    let app = test_app();
    let sow = b"Requirement: Hub and spoke network\nAssumption: Customer owns DNS\n";

    let response = app
        .router
        .clone()
        .oneshot(generate_request(&valid_parts(sow)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["filename"], "Acme_Migration_HLD_v1.0.docx");
    assert!(body["generatedAt"].is_string());
    let download_url = body["downloadUrl"].as_str().unwrap().to_string();
    assert!(download_url.starts_with("/api/download/"));
    assert!(download_url.ends_with("_Acme_Migration_HLD_v1.0.docx"));
    assert!(app.uploads.is_empty());
    assert_eq!(app.outputs.names().len(), 1);

    let response = app.router.oneshot(get(&download_url)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], DOCX_CONTENT_TYPE);
    let disposition = response.headers()[header::CONTENT_DISPOSITION]
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment; filename=\""));
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..2], b"PK");
}

#[tokio::test]
async fn given_oversized_upload_when_generating_then_rejects_with_limit_message() {
    let app = test_app();
    let large = vec![b'a'; 15 * 1024 * 1024];

    let response = app
        .router
        .oneshot(generate_request(&valid_parts(&large)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"], "File size exceeds the 10MB limit");
    assert!(app.uploads.is_empty());
    assert!(app.outputs.is_empty());
}

#[tokio::test]
async fn given_disallowed_extension_when_generating_then_lists_allowed_types() {
    let app = test_app();

    let response = app
        .router
        .oneshot(generate_request(&[
            Part::File("sowFile", "payload.exe", b"MZ"),
            Part::Text("platform", "aws"),
            Part::Text("documentType", "hld"),
            Part::Text("projectDetails", PROJECT_DETAILS),
        ]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(
        body["error"],
        "Invalid file type: .exe. Allowed: .pdf, .docx, .txt"
    );
    assert_eq!(body["type"], "ValidationError");
}

#[tokio::test]
async fn given_missing_file_when_generating_then_reports_no_upload() {
    let app = test_app();

    let response = app
        .router
        .oneshot(generate_request(&[
            Part::Text("platform", "aws"),
            Part::Text("documentType", "hld"),
            Part::Text("projectDetails", PROJECT_DETAILS),
        ]))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["error"], "No SOW file uploaded");
}

#[tokio::test]
async fn given_invalid_form_values_when_generating_then_reports_each_problem() {
    let cases: [(&str, &str, &str, &str); 4] = [
        ("gcp", "hld", PROJECT_DETAILS, "Invalid platform. Must be \"aws\" or \"azure\""),
        ("aws", "mld", PROJECT_DETAILS, "Invalid documentType. Must be \"hld\" or \"lld\""),
        ("aws", "hld", "{not json", "Invalid projectDetails format"),
        (
            "aws",
            "hld",
            r#"{"projectName":"Acme","clientName":"","authorName":"Jane"}"#,
            "projectName, clientName, and authorName are required",
        ),
    ];

    for (platform, document_type, details, expected) in cases {
        let app = test_app();

        let response = app
            .router
            .oneshot(generate_request(&[
                Part::File("sowFile", "sow.txt", b"Requirement: HA"),
                Part::Text("platform", platform),
                Part::Text("documentType", document_type),
                Part::Text("projectDetails", details),
            ]))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{expected}");
        assert_eq!(json_body(response).await["error"], expected);
        assert_eq!(app.uploads.calls(), 0);
    }
}
