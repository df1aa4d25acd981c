use sowdoc::application::ports::DocumentRenderer;
use sowdoc::application::services::assemble;
use sowdoc::domain::{
    DocumentBlock, DocumentType, HeadingLevel, ParagraphStyle, Platform, SowAnalysis,
};
use sowdoc::infrastructure::rendering::DocxRenderer;

use crate::support::{context, docx_text};

#[tokio::test]
async fn given_assembled_hld_when_rendering_then_document_carries_title_page_and_content() {
    let analysis = SowAnalysis {
        requirements: vec!["Encrypt data at rest".to_string()],
        ..SowAnalysis::default()
    };
    let ctx = context(analysis, Platform::Aws, DocumentType::Hld);
    let blocks = assemble(&ctx);

    let bytes = DocxRenderer::new().render(&blocks, &ctx).unwrap();
    let text = docx_text(&bytes).await;

    assert!(text.contains("Amazon Web Services (AWS)"));
    assert!(text.contains("Acme Migration"));
    assert!(text.contains("High-Level Design (HLD) Document"));
    assert!(text.contains("Classification | Confidential"));
    assert!(text.contains("Date | March 5, 2025"));
    assert!(text.contains("Region | eu-west-1"));
    assert!(text.contains("REQ-001 | Infrastructure | Encrypt data at rest | Defined"));
}

#[tokio::test]
async fn given_each_block_kind_when_rendering_then_text_survives() {
    let ctx = context(SowAnalysis::default(), Platform::Azure, DocumentType::Lld);
    let blocks = vec![
        DocumentBlock::Heading {
            text: "1. Introduction".to_string(),
            level: HeadingLevel::H1,
        },
        DocumentBlock::Paragraph {
            text: "hub and spoke".to_string(),
            style: ParagraphStyle::labeled("Topology: "),
        },
        DocumentBlock::Bullet {
            text: "Dual tunnels".to_string(),
            level: 1,
        },
        DocumentBlock::Table {
            headers: vec!["Name".to_string(), "CIDR".to_string()],
            rows: vec![vec!["snet-app".to_string(), "10.1.0.0/24".to_string()]],
            column_widths: vec![],
        },
        DocumentBlock::InfoBox {
            title: "Note".to_string(),
            text: "Review before go-live".to_string(),
        },
        DocumentBlock::PageBreak,
    ];

    let bytes = DocxRenderer::new().render(&blocks, &ctx).unwrap();
    let text = docx_text(&bytes).await;

    assert!(text.contains("Microsoft Azure"));
    assert!(text.contains("Low-Level Design (LLD) Document"));
    assert!(text.contains("1. Introduction"));
    assert!(text.contains("Topology: hub and spoke"));
    assert!(text.contains("Dual tunnels"));
    assert!(text.contains("Name | CIDR"));
    assert!(text.contains("snet-app | 10.1.0.0/24"));
    assert!(text.contains("Review before go-live"));
}

#[test]
fn given_rendered_document_when_inspecting_bytes_then_is_zip_container() {
    let ctx = context(SowAnalysis::default(), Platform::Aws, DocumentType::Lld);
    let bytes = DocxRenderer::new().render(&assemble(&ctx), &ctx).unwrap();

    assert_eq!(&bytes[..2], b"PK");
}
