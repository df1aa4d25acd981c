/// One renderable unit of a generated design document.
///
/// Assemblers emit these in reading order; renderers consume them without
/// reordering.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentBlock {
    Heading {
        text: String,
        level: HeadingLevel,
    },
    Paragraph {
        text: String,
        style: ParagraphStyle,
    },
    Bullet {
        text: String,
        level: u8,
    },
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
        column_widths: Vec<usize>,
    },
    InfoBox {
        title: String,
        text: String,
    },
    PageBreak,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    pub fn style_id(&self) -> &'static str {
        match self {
            HeadingLevel::H1 => "Heading1",
            HeadingLevel::H2 => "Heading2",
            HeadingLevel::H3 => "Heading3",
        }
    }
}

/// Run and spacing options for a body paragraph. Sizes are half-points,
/// spacing is twentieths of a point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParagraphStyle {
    pub label: Option<String>,
    pub bold: bool,
    pub italics: bool,
    pub color: Option<String>,
    pub size: usize,
    pub space_before: u32,
    pub space_after: u32,
}

pub const DEFAULT_PARAGRAPH_SIZE: usize = 22;
pub const DEFAULT_SPACE_AFTER: u32 = 120;

impl Default for ParagraphStyle {
    fn default() -> Self {
        Self {
            label: None,
            bold: false,
            italics: false,
            color: None,
            size: DEFAULT_PARAGRAPH_SIZE,
            space_before: 0,
            space_after: DEFAULT_SPACE_AFTER,
        }
    }
}

impl ParagraphStyle {
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    pub fn italic() -> Self {
        Self {
            italics: true,
            ..Self::default()
        }
    }

    pub fn muted(color: &str) -> Self {
        Self {
            italics: true,
            color: Some(color.to_string()),
            ..Self::default()
        }
    }

    pub fn space_before(mut self, twips: u32) -> Self {
        self.space_before = twips;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}
