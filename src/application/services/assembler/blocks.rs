use crate::domain::{DocumentBlock, HeadingLevel, ParagraphStyle};

/// Accumulates blocks in document order.
#[derive(Debug, Default)]
pub struct Blocks {
    items: Vec<DocumentBlock>,
}

impl Blocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn h1(&mut self, text: impl Into<String>) {
        self.heading(text, HeadingLevel::H1);
    }

    pub fn h2(&mut self, text: impl Into<String>) {
        self.heading(text, HeadingLevel::H2);
    }

    pub fn h3(&mut self, text: impl Into<String>) {
        self.heading(text, HeadingLevel::H3);
    }

    fn heading(&mut self, text: impl Into<String>, level: HeadingLevel) {
        self.items.push(DocumentBlock::Heading {
            text: text.into(),
            level,
        });
    }

    pub fn para(&mut self, text: impl Into<String>) {
        self.para_with(text, ParagraphStyle::default());
    }

    pub fn para_with(&mut self, text: impl Into<String>, style: ParagraphStyle) {
        self.items.push(DocumentBlock::Paragraph {
            text: text.into(),
            style,
        });
    }

    /// Lead-in paragraph introducing a list.
    pub fn intro(&mut self, text: impl Into<String>) {
        self.para_with(text, ParagraphStyle::default().space_before(120));
    }

    pub fn labeled(&mut self, label: impl Into<String>, text: impl Into<String>) {
        self.para_with(text, ParagraphStyle::labeled(label));
    }

    pub fn italic(&mut self, text: impl Into<String>) {
        self.para_with(text, ParagraphStyle::italic());
    }

    pub fn placeholder(&mut self, text: impl Into<String>) {
        self.para_with(text, ParagraphStyle::muted("999999"));
    }

    pub fn bullet(&mut self, text: impl Into<String>) {
        self.items.push(DocumentBlock::Bullet {
            text: text.into(),
            level: 0,
        });
    }

    pub fn bullets<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for item in items {
            self.bullet(item);
        }
    }

    pub fn table(&mut self, headers: &[&str], rows: Vec<Vec<String>>, column_widths: &[usize]) {
        self.items.push(DocumentBlock::Table {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows,
            column_widths: column_widths.to_vec(),
        });
    }

    pub fn info_box(&mut self, title: impl Into<String>, text: impl Into<String>) {
        self.items.push(DocumentBlock::InfoBox {
            title: title.into(),
            text: text.into(),
        });
    }

    pub fn page_break(&mut self) {
        self.items.push(DocumentBlock::PageBreak);
    }

    pub fn into_blocks(self) -> Vec<DocumentBlock> {
        self.items
    }
}

/// Converts a literal table body into owned rows.
pub fn rows(literal: &[&[&str]]) -> Vec<Vec<String>> {
    literal
        .iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect()
}
