use std::io::Cursor;
use std::sync::Arc;

use docx_rs::{Docx, Paragraph, Run, Table, TableCell, TableRow};

use sowdoc::application::ports::{FileLoader, FileLoaderError};
use sowdoc::domain::{SourceDocument, SourceFormat};
use sowdoc::infrastructure::text_processing::{
    CompositeFileLoader, DocxAdapter, PdfAdapter, PlainTextAdapter,
};

fn document(filename: &str, format: SourceFormat, data: &[u8]) -> SourceDocument {
    SourceDocument::new(filename.to_string(), format, data.len() as u64)
}

fn cell(text: &str) -> TableCell {
    TableCell::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text(text)))
}

fn sample_docx() -> Vec<u8> {
    let mut buffer = Cursor::new(Vec::new());
    Docx::new()
        .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Statement of Work")))
        .add_paragraph(
            Paragraph::new().add_run(Run::new().add_text("Requirement:   Dual   VPN tunnels")),
        )
        .add_table(Table::new(vec![
            TableRow::new(vec![cell("Server"), cell("Role")]),
            TableRow::new(vec![cell("web01"), cell("Frontend")]),
        ]))
        .build()
        .pack(&mut buffer)
        .unwrap();
    buffer.into_inner()
}

#[tokio::test]
async fn given_docx_with_paragraphs_and_table_when_extracting_then_returns_lines() {
    let data = sample_docx();
    let doc = document("sow.docx", SourceFormat::Docx, &data);

    let text = DocxAdapter.extract_text(&data, &doc).await.unwrap();

    assert!(text.contains("Statement of Work"));
    assert!(text.contains("Requirement: Dual VPN tunnels"));
    assert!(text.contains("Server | Role"));
    assert!(text.contains("web01 | Frontend"));
}

#[tokio::test]
async fn given_corrupt_docx_when_extracting_then_reports_extraction_failure() {
    let data = b"not a zip archive".to_vec();
    let doc = document("sow.docx", SourceFormat::Docx, &data);

    let result = DocxAdapter.extract_text(&data, &doc).await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_empty_docx_when_extracting_then_reports_no_text() {
    let mut buffer = Cursor::new(Vec::new());
    Docx::new().build().pack(&mut buffer).unwrap();
    let data = buffer.into_inner();
    let doc = document("blank.docx", SourceFormat::Docx, &data);

    let result = DocxAdapter.extract_text(&data, &doc).await;

    assert!(matches!(result, Err(FileLoaderError::NoTextFound(name)) if name == "blank.docx"));
}

#[tokio::test]
async fn given_mismatched_format_when_extracting_then_adapters_reject_it() {
    let data = b"plain".to_vec();
    let txt = document("sow.txt", SourceFormat::Text, &data);
    let pdf = document("sow.pdf", SourceFormat::Pdf, &data);

    assert!(matches!(
        DocxAdapter.extract_text(&data, &txt).await,
        Err(FileLoaderError::UnsupportedFileType(ext)) if ext == ".txt"
    ));
    assert!(matches!(
        PdfAdapter::new().extract_text(&data, &txt).await,
        Err(FileLoaderError::UnsupportedFileType(_))
    ));
    assert!(matches!(
        PlainTextAdapter.extract_text(&data, &pdf).await,
        Err(FileLoaderError::UnsupportedFileType(ext)) if ext == ".pdf"
    ));
}

#[tokio::test]
async fn given_corrupt_pdf_when_extracting_then_reports_extraction_failure() {
    let data = b"%PDF-1.7 truncated".to_vec();
    let doc = document("sow.pdf", SourceFormat::Pdf, &data);

    let result = PdfAdapter::new().extract_text(&data, &doc).await;

    assert!(matches!(
        result,
        Err(FileLoaderError::ExtractionFailed(_) | FileLoaderError::NoTextFound(_))
    ));
}

#[tokio::test]
async fn given_utf8_text_when_extracting_then_returns_it_verbatim() {
    let data = "Scope includes: landing zone\n".as_bytes().to_vec();
    let doc = document("sow.txt", SourceFormat::Text, &data);

    let text = PlainTextAdapter.extract_text(&data, &doc).await.unwrap();

    assert_eq!(text, "Scope includes: landing zone\n");
}

#[tokio::test]
async fn given_byte_order_mark_when_extracting_text_then_strips_it() {
    let data = b"\xEF\xBB\xBFIn scope: VPC".to_vec();
    let doc = document("sow.txt", SourceFormat::Text, &data);

    let text = PlainTextAdapter.extract_text(&data, &doc).await.unwrap();

    assert_eq!(text, "In scope: VPC");
}

#[tokio::test]
async fn given_invalid_utf8_when_extracting_text_then_reports_extraction_failure() {
    let data = vec![0xc3, 0x28];
    let doc = document("sow.txt", SourceFormat::Text, &data);

    let result = PlainTextAdapter.extract_text(&data, &doc).await;

    assert!(matches!(
        result,
        Err(FileLoaderError::ExtractionFailed(msg)) if msg.starts_with("invalid UTF-8")
    ));
}

#[tokio::test]
async fn given_default_composite_when_extracting_then_dispatches_by_format() {
    let loader = CompositeFileLoader::default();

    let txt = b"hello".to_vec();
    let text = loader
        .extract_text(&txt, &document("a.txt", SourceFormat::Text, &txt))
        .await
        .unwrap();
    assert_eq!(text, "hello");

    let docx = sample_docx();
    let text = loader
        .extract_text(&docx, &document("a.docx", SourceFormat::Docx, &docx))
        .await
        .unwrap();
    assert!(text.contains("web01 | Frontend"));
}

#[tokio::test]
async fn given_composite_without_adapter_when_extracting_then_reports_unsupported() {
    let loader = CompositeFileLoader::new(vec![(
        SourceFormat::Text,
        Arc::new(PlainTextAdapter) as Arc<dyn FileLoader>,
    )]);
    let data = b"%PDF".to_vec();

    let result = loader
        .extract_text(&data, &document("a.pdf", SourceFormat::Pdf, &data))
        .await;

    assert!(matches!(
        result,
        Err(FileLoaderError::UnsupportedFileType(ext)) if ext == ".pdf"
    ));
}
