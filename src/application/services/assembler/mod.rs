//! Turns a [`RenderContext`] into the ordered block sequence of an HLD or LLD.
//!
//! Each document is a static outline of sections. A section either renders
//! fixed, platform-specific content or picks between analysis-driven content
//! and a default when the analysis left that part empty.

mod blocks;
mod helpers;
mod hld;
mod lld;
mod section;

use crate::domain::{DocumentBlock, DocumentType, RenderContext};

pub use blocks::{Blocks, rows};
pub use helpers::{component_description, project_short_name, usable_ips};
pub use hld::assemble_hld;
pub use lld::assemble_lld;

/// Assembles the blocks for the document type carried by the context.
pub fn assemble(ctx: &RenderContext) -> Vec<DocumentBlock> {
    match ctx.document_type {
        DocumentType::Hld => assemble_hld(ctx),
        DocumentType::Lld => assemble_lld(ctx),
    }
}
