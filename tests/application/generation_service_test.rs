use std::sync::Arc;

use bytes::Bytes;

use sowdoc::application::ports::{FileLoaderError, FileStore};
use sowdoc::application::services::{GenerationError, GenerationRequest, GenerationService};
use sowdoc::domain::{DocumentType, OutputFilename, Platform};
use sowdoc::infrastructure::llm::MockLlmClient;
use sowdoc::infrastructure::rendering::DocxRenderer;
use sowdoc::infrastructure::storage::MockFileStore;
use sowdoc::infrastructure::text_processing::MockFileLoader;

use crate::support::{docx_text, project};

type Service = GenerationService<MockFileLoader, MockLlmClient, DocxRenderer>;

fn service(uploads: Arc<MockFileStore>, outputs: Arc<MockFileStore>) -> Service {
    GenerationService::new(
        Arc::new(MockFileLoader),
        Arc::new(MockLlmClient::failing()),
        Arc::new(DocxRenderer::new()),
        uploads,
        outputs,
    )
}

#[tokio::test]
async fn given_text_upload_when_generating_then_stores_output_and_removes_upload() {
    let uploads = Arc::new(MockFileStore::new());
    let outputs = Arc::new(MockFileStore::new());
    let service = service(uploads.clone(), outputs.clone());

    let source = service
        .stage_upload(
            "sow.txt",
            Bytes::from_static(b"Requirement: Hub and spoke network\n"),
        )
        .await
        .unwrap();
    assert_eq!(uploads.names(), [source.staged_name()]);

    let generated = service
        .generate(GenerationRequest {
            source,
            platform: Platform::Aws,
            document_type: DocumentType::Hld,
            project: project(),
            additional_info: None,
        })
        .await
        .unwrap();

    assert!(uploads.is_empty());
    assert_eq!(outputs.names(), [generated.output.to_string()]);
    assert_eq!(generated.download_name, "Acme_Migration_HLD_v1.0.docx");
    assert!(generated.output.as_str().ends_with("_Acme_Migration_HLD_v1.0.docx"));

    let stored = service.fetch_output(&generated.output).await.unwrap();
    let text = docx_text(&stored).await;
    assert!(text.contains("Hub and spoke network"));
}

#[tokio::test]
async fn given_unsupported_extension_when_staging_then_rejects_without_storing() {
    let uploads = Arc::new(MockFileStore::new());
    let service = service(uploads.clone(), Arc::new(MockFileStore::new()));

    let result = service
        .stage_upload("payload.exe", Bytes::from_static(b"MZ"))
        .await;

    assert!(matches!(
        result,
        Err(GenerationError::FileLoading(FileLoaderError::UnsupportedFileType(ext))) if ext == ".exe"
    ));
    assert_eq!(uploads.calls(), 0);
}

#[tokio::test]
async fn given_unextractable_upload_when_generating_then_still_removes_upload() {
    let uploads = Arc::new(MockFileStore::new());
    let outputs = Arc::new(MockFileStore::new());
    let service = service(uploads.clone(), outputs.clone());

    let source = service
        .stage_upload("sow.txt", Bytes::from_static(&[0xff, 0xfe, 0x00]))
        .await
        .unwrap();

    let result = service
        .generate(GenerationRequest {
            source,
            platform: Platform::Azure,
            document_type: DocumentType::Lld,
            project: project(),
            additional_info: None,
        })
        .await;

    assert!(matches!(result, Err(GenerationError::FileLoading(_))));
    assert!(uploads.is_empty());
    assert!(outputs.is_empty());
}

#[tokio::test]
async fn given_missing_output_when_fetching_then_reports_not_found() {
    let outputs = Arc::new(MockFileStore::new());
    outputs
        .put("other.docx", Bytes::from_static(b"x"))
        .await
        .unwrap();
    let service = service(Arc::new(MockFileStore::new()), outputs);

    let result = service
        .fetch_output(&OutputFilename::parse("missing.docx").unwrap())
        .await;

    assert!(matches!(result, Err(GenerationError::Storage(_))));
}
