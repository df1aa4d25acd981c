use std::io::Cursor;

use docx_rs::{
    AbstractNumbering, AlignmentType, BreakType, Docx, FieldCharType, Footer, Header, IndentLevel,
    InstrNUMPAGES, InstrPAGE, InstrText, Level, LevelJc, LevelText, LineSpacing, NumberFormat,
    Numbering, NumberingId, PageMargin, Paragraph, Run, RunFonts, Shading, SpecialIndentType,
    Start, Style, StyleType, Table, TableBorder, TableBorderPosition, TableBorders, TableCell,
    TableCellMargins, TableRow, WidthType,
};

use crate::application::ports::{DocumentRenderer, RenderError};
use crate::domain::{DocumentBlock, HeadingLevel, ParagraphStyle, RenderContext};

const FONT: &str = "Arial";
const BODY_SIZE: usize = 24;
const CELL_SIZE: usize = 20;

const PRIMARY: &str = "1F4E79";
const SECONDARY: &str = "2E75B6";
const TABLE_BORDER: &str = "CCCCCC";
const STRIPE_FILL: &str = "F2F7FB";
const INFO_FILL: &str = "E8F4FD";

const PAGE_WIDTH: u32 = 12240;
const PAGE_HEIGHT: u32 = 15840;
const PAGE_MARGIN: i32 = 1440;
const CONTENT_WIDTH: usize = 9360;

const BULLETS: usize = 1;

/// Writes blocks as a Word document with the house style: Arial body text,
/// blue headings, striped tables and a running header and footer.
#[derive(Default)]
pub struct DocxRenderer;

impl DocxRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentRenderer for DocxRenderer {
    #[tracing::instrument(
        skip(self, blocks, context),
        fields(blocks = blocks.len(), document_type = %context.document_type)
    )]
    fn render(
        &self,
        blocks: &[DocumentBlock],
        context: &RenderContext,
    ) -> Result<Vec<u8>, RenderError> {
        let mut docx = base_document(context);

        for item in title_page(context) {
            docx = match item {
                Element::Paragraph(p) => docx.add_paragraph(p),
                Element::Table(t) => docx.add_table(t),
            };
        }

        for block in blocks {
            docx = match render_block(block) {
                Element::Paragraph(p) => docx.add_paragraph(p),
                Element::Table(t) => docx.add_table(t),
            };
        }

        let mut buffer = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut buffer)
            .map_err(|e| RenderError::Serialization(e.to_string()))?;

        let bytes = buffer.into_inner();
        tracing::debug!(bytes = bytes.len(), "DOCX serialized");
        Ok(bytes)
    }
}

enum Element {
    Paragraph(Paragraph),
    Table(Table),
}

fn base_document(context: &RenderContext) -> Docx {
    let abbreviation = context.document_type.abbreviation();

    let header = Header::new().add_paragraph(
        Paragraph::new().align(AlignmentType::Right).add_run(
            text_run(
                format!("{} {} - Confidential", context.project_name, abbreviation),
                18,
            )
            .italic()
            .color("666666"),
        ),
    );

    let footer_run = |text: &str| text_run(text, 16).color("999999");
    let footer = Footer::new().add_paragraph(
        Paragraph::new()
            .align(AlignmentType::Center)
            .add_run(footer_run(&format!(
                "{} | {} | Page ",
                context.client_name,
                context.formatted_date()
            )))
            .add_run(field_run(InstrText::PAGE(InstrPAGE::new())))
            .add_run(footer_run(" of "))
            .add_run(field_run(InstrText::NUMPAGES(InstrNUMPAGES::new()))),
    );

    Docx::new()
        .default_fonts(fonts())
        .default_size(BODY_SIZE)
        .page_size(PAGE_WIDTH, PAGE_HEIGHT)
        .page_margin(
            PageMargin::new()
                .top(PAGE_MARGIN)
                .right(PAGE_MARGIN)
                .bottom(PAGE_MARGIN)
                .left(PAGE_MARGIN),
        )
        .add_style(heading_style(HeadingLevel::H1, "Heading 1", 36, PRIMARY))
        .add_style(heading_style(HeadingLevel::H2, "Heading 2", 28, SECONDARY))
        .add_style(heading_style(HeadingLevel::H3, "Heading 3", 24, "404040"))
        .add_abstract_numbering(
            AbstractNumbering::new(BULLETS)
                .add_level(bullet_level(0, "\u{2022}", 720))
                .add_level(bullet_level(1, "\u{25E6}", 1440)),
        )
        .add_numbering(Numbering::new(BULLETS, BULLETS))
        .header(header)
        .footer(footer)
}

fn heading_style(level: HeadingLevel, name: &str, size: usize, color: &str) -> Style {
    Style::new(level.style_id(), StyleType::Paragraph)
        .name(name)
        .based_on("Normal")
        .next("Normal")
        .fonts(fonts())
        .size(size)
        .bold()
        .color(color)
}

fn bullet_level(level: usize, glyph: &str, indent: i32) -> Level {
    Level::new(
        level,
        Start::new(1),
        NumberFormat::new("bullet"),
        LevelText::new(glyph),
        LevelJc::new("left"),
    )
    .indent(Some(indent), Some(SpecialIndentType::Hanging(360)), None, None)
}

fn heading_spacing(level: HeadingLevel) -> LineSpacing {
    match level {
        HeadingLevel::H1 => LineSpacing::new().before(360).after(240),
        HeadingLevel::H2 => LineSpacing::new().before(280).after(180),
        HeadingLevel::H3 => LineSpacing::new().before(200).after(120),
    }
}

fn fonts() -> RunFonts {
    RunFonts::new().ascii(FONT).hi_ansi(FONT).cs(FONT)
}

fn text_run(text: impl AsRef<str>, size: usize) -> Run {
    Run::new().add_text(text.as_ref()).fonts(fonts()).size(size)
}

fn field_run(instr: InstrText) -> Run {
    Run::new()
        .fonts(fonts())
        .size(16)
        .color("999999")
        .add_field_char(FieldCharType::Begin, false)
        .add_instr_text(instr)
        .add_field_char(FieldCharType::Separate, false)
        .add_text("1")
        .add_field_char(FieldCharType::End, false)
}

fn render_block(block: &DocumentBlock) -> Element {
    match block {
        DocumentBlock::Heading { text, level } => Element::Paragraph(
            Paragraph::new()
                .style(level.style_id())
                .line_spacing(heading_spacing(*level))
                .add_run(Run::new().add_text(text.as_str()).fonts(fonts())),
        ),
        DocumentBlock::Paragraph { text, style } => {
            Element::Paragraph(styled_paragraph(text, style))
        }
        DocumentBlock::Bullet { text, level } => Element::Paragraph(
            Paragraph::new()
                .numbering(
                    NumberingId::new(BULLETS),
                    IndentLevel::new(usize::from((*level).min(1))),
                )
                .line_spacing(LineSpacing::new().after(60))
                .add_run(text_run(text, 22)),
        ),
        DocumentBlock::Table {
            headers,
            rows,
            column_widths,
        } => Element::Table(data_table(headers, rows, column_widths)),
        DocumentBlock::InfoBox { title, text } => Element::Table(info_box(title, text)),
        DocumentBlock::PageBreak => Element::Paragraph(page_break()),
    }
}

fn styled_paragraph(text: &str, style: &ParagraphStyle) -> Paragraph {
    let mut paragraph = Paragraph::new().line_spacing(
        LineSpacing::new()
            .before(style.space_before)
            .after(style.space_after),
    );

    if let Some(label) = &style.label {
        paragraph = paragraph.add_run(text_run(label, style.size).bold().color(PRIMARY));
    }

    let mut run = text_run(text, style.size).color(style.color.as_deref().unwrap_or("000000"));
    if style.bold {
        run = run.bold();
    }
    if style.italics {
        run = run.italic();
    }
    paragraph.add_run(run)
}

fn page_break() -> Paragraph {
    Paragraph::new().add_run(Run::new().add_break(BreakType::Page))
}

fn borders(color: &str) -> TableBorders {
    [
        TableBorderPosition::Top,
        TableBorderPosition::Left,
        TableBorderPosition::Bottom,
        TableBorderPosition::Right,
        TableBorderPosition::InsideH,
        TableBorderPosition::InsideV,
    ]
    .into_iter()
    .fold(TableBorders::new(), |acc, position| {
        acc.set(TableBorder::new(position).size(4).color(color))
    })
}

/// Uses the requested widths when they cover every column, otherwise splits
/// the content width evenly.
fn effective_widths(columns: usize, requested: &[usize]) -> Vec<usize> {
    if requested.len() == columns && requested.iter().all(|w| *w > 0) {
        requested.to_vec()
    } else {
        vec![CONTENT_WIDTH / columns.max(1); columns]
    }
}

fn cell(text: &str, width: usize, run: Run, fill: Option<&str>) -> TableCell {
    let mut cell = TableCell::new()
        .width(width, WidthType::Dxa)
        .add_paragraph(Paragraph::new().add_run(run.add_text(text)));
    if let Some(fill) = fill {
        cell = cell.shading(Shading::new().fill(fill));
    }
    cell
}

fn data_table(headers: &[String], rows: &[Vec<String>], column_widths: &[usize]) -> Table {
    let widths = effective_widths(headers.len(), column_widths);

    let header_row = TableRow::new(
        headers
            .iter()
            .zip(&widths)
            .map(|(header, width)| {
                let run = Run::new()
                    .fonts(fonts())
                    .size(CELL_SIZE)
                    .bold()
                    .color("FFFFFF");
                cell(header, *width, run, Some(PRIMARY))
            })
            .collect(),
    );

    let data_rows = rows.iter().enumerate().map(|(index, row)| {
        let fill = (index % 2 == 1).then_some(STRIPE_FILL);
        TableRow::new(
            widths
                .iter()
                .enumerate()
                .map(|(col, width)| {
                    let text = row.get(col).map(String::as_str).unwrap_or("");
                    cell(text, *width, Run::new().fonts(fonts()).size(CELL_SIZE), fill)
                })
                .collect(),
        )
    });

    Table::new(std::iter::once(header_row).chain(data_rows).collect())
        .set_grid(widths)
        .width(CONTENT_WIDTH, WidthType::Dxa)
        .set_borders(borders(TABLE_BORDER))
        .margins(TableCellMargins::new().margin(80, 120, 80, 120))
}

fn info_box(title: &str, text: &str) -> Table {
    let body = TableCell::new()
        .width(CONTENT_WIDTH, WidthType::Dxa)
        .shading(Shading::new().fill(INFO_FILL))
        .add_paragraph(
            Paragraph::new()
                .line_spacing(LineSpacing::new().after(80))
                .add_run(text_run(title, CELL_SIZE).bold().color(PRIMARY)),
        )
        .add_paragraph(
            Paragraph::new().add_run(text_run(text, CELL_SIZE).italic().color("333333")),
        );

    Table::new(vec![TableRow::new(vec![body])])
        .set_grid(vec![CONTENT_WIDTH])
        .width(CONTENT_WIDTH, WidthType::Dxa)
        .set_borders(borders(SECONDARY))
        .margins(TableCellMargins::new().margin(100, 150, 100, 150))
}

fn rule() -> Paragraph {
    Paragraph::new()
        .align(AlignmentType::Center)
        .line_spacing(LineSpacing::new().after(100))
        .add_run(text_run("\u{2500}".repeat(40), 20).color(TABLE_BORDER))
}

fn title_page(context: &RenderContext) -> Vec<Element> {
    let platform = context.platform.display_name();
    let abbreviation = context.document_type.abbreviation();

    let project = &context.project;
    let metadata: Vec<Vec<String>> = [
        (
            "Document Title",
            format!("{} - {}", context.project_name, abbreviation),
        ),
        ("Client", context.client_name.clone()),
        ("Author", project.author_name.clone()),
        ("Version", project.version.clone()),
        ("Date", context.formatted_date()),
        ("Classification", "Confidential".to_string()),
        ("Platform", platform.to_string()),
        ("Region", project.region().unwrap_or("N/A").to_string()),
    ]
    .into_iter()
    .map(|(field, details)| vec![field.to_string(), details])
    .collect();

    vec![
        Element::Paragraph(Paragraph::new().line_spacing(LineSpacing::new().before(2400))),
        Element::Paragraph(
            Paragraph::new()
                .align(AlignmentType::Center)
                .line_spacing(LineSpacing::new().after(200))
                .add_run(
                    text_run(platform, 28)
                        .bold()
                        .color(context.platform.accent_color()),
                ),
        ),
        Element::Paragraph(rule()),
        Element::Paragraph(
            Paragraph::new()
                .align(AlignmentType::Center)
                .line_spacing(LineSpacing::new().after(200))
                .add_run(text_run(&context.project_name, 48).bold().color(PRIMARY)),
        ),
        Element::Paragraph(
            Paragraph::new()
                .align(AlignmentType::Center)
                .line_spacing(LineSpacing::new().after(400))
                .add_run(
                    text_run(
                        format!(
                            "{} ({}) Document",
                            context.document_type.full_name(),
                            abbreviation
                        ),
                        32,
                    )
                    .color(SECONDARY),
                ),
        ),
        Element::Paragraph(rule()),
        Element::Paragraph(Paragraph::new().line_spacing(LineSpacing::new().after(600))),
        Element::Table(data_table(
            &["Field".to_string(), "Details".to_string()],
            &metadata,
            &[3000, 6360],
        )),
        Element::Paragraph(page_break()),
    ]
}
