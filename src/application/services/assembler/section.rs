use crate::domain::{DocumentBlock, ParagraphStyle, RenderContext};

use super::blocks::Blocks;

pub(super) type Render = fn(&RenderContext, &mut Blocks);

/// One entry in an ordered document outline.
pub(super) enum Section {
    /// Always rendered the same way for a given platform.
    Fixed(Render),
    /// Rendered from analysis data when present, otherwise from defaults.
    DataDriven {
        has_data: fn(&RenderContext) -> bool,
        from_data: Render,
        fallback: Render,
    },
}

impl Section {
    fn render(&self, ctx: &RenderContext, out: &mut Blocks) {
        match self {
            Section::Fixed(render) => render(ctx, out),
            Section::DataDriven {
                has_data,
                from_data,
                fallback,
            } => {
                if has_data(ctx) {
                    from_data(ctx, out)
                } else {
                    fallback(ctx, out)
                }
            }
        }
    }
}

pub(super) fn render_outline(outline: &[Section], ctx: &RenderContext) -> Vec<DocumentBlock> {
    let mut out = Blocks::new();
    for section in outline {
        section.render(ctx, &mut out);
    }
    out.into_blocks()
}

/// Fallback for optional sections that render nothing without data.
pub(super) fn omit(_: &RenderContext, _: &mut Blocks) {}

/// Placeholder heading that Word turns into a real table of contents.
pub(super) fn table_of_contents(_: &RenderContext, b: &mut Blocks) {
    b.h1("Table of Contents");
    b.para_with(
        "(Auto-generated table of contents - Update field in Word to populate)",
        ParagraphStyle::muted("666666"),
    );
    b.page_break();
}
