use async_trait::async_trait;
use docx_rs::{
    DocumentChild, Paragraph, ParagraphChild, RunChild, Table, TableCellContent, TableChild,
    TableRowChild,
};

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{SourceDocument, SourceFormat};

use super::text_sanitizer::sanitize_extracted_text;

const CELL_SEPARATOR: &str = " | ";

/// Raw text of a Word document: one line per paragraph, one line per table
/// row with its cells separated by ` | `.
pub struct DocxAdapter;

impl DocxAdapter {
    fn collect_text(data: &[u8]) -> Result<String, FileLoaderError> {
        let docx = docx_rs::read_docx(data)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse DOCX: {e}")))?;

        let mut lines: Vec<String> = Vec::new();
        for child in &docx.document.children {
            match child {
                DocumentChild::Paragraph(para) => lines.push(paragraph_text(para)),
                DocumentChild::Table(table) => table_lines(table, &mut lines),
                _ => {}
            }
        }

        Ok(lines.join("\n"))
    }
}

fn paragraph_text(para: &Paragraph) -> String {
    let mut out = String::new();
    for child in &para.children {
        match child {
            ParagraphChild::Run(run) => push_run_text(&run.children, &mut out),
            ParagraphChild::Hyperlink(link) => {
                for inner in &link.children {
                    if let ParagraphChild::Run(run) = inner {
                        push_run_text(&run.children, &mut out);
                    }
                }
            }
            _ => {}
        }
    }
    out
}

fn push_run_text(children: &[RunChild], out: &mut String) {
    for child in children {
        match child {
            RunChild::Text(text) => out.push_str(&text.text),
            RunChild::Tab(_) => out.push('\t'),
            _ => {}
        }
    }
}

fn table_lines(table: &Table, lines: &mut Vec<String>) {
    for row in &table.rows {
        let TableChild::TableRow(tr) = row;
        let cells: Vec<String> = tr
            .cells
            .iter()
            .map(|cell| {
                let TableRowChild::TableCell(tc) = cell;
                tc.children
                    .iter()
                    .filter_map(|content| match content {
                        TableCellContent::Paragraph(para) => Some(paragraph_text(para)),
                        _ => None,
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();
        lines.push(cells.join(CELL_SEPARATOR));
    }
}

#[async_trait]
impl FileLoader for DocxAdapter {
    #[tracing::instrument(
        skip(self, data),
        fields(
            generation_id = %document.id.as_uuid(),
            filename = %document.filename,
        )
    )]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &SourceDocument,
    ) -> Result<String, FileLoaderError> {
        if document.format != SourceFormat::Docx {
            return Err(FileLoaderError::UnsupportedFileType(
                document.format.as_extension().to_string(),
            ));
        }

        let bytes = data.to_vec();
        let raw = tokio::task::spawn_blocking(move || Self::collect_text(&bytes))
            .await
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        let text = sanitize_extracted_text(&raw);
        tracing::info!(chars = text.len(), "DOCX text extraction complete");

        if text.is_empty() {
            return Err(FileLoaderError::NoTextFound(document.filename.clone()));
        }

        Ok(text)
    }
}
