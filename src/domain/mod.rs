mod document_block;
mod document_type;
mod generation_id;
mod output_filename;
mod platform;
mod project_details;
mod render_context;
mod source_document;
mod sow_analysis;

pub use document_block::{
    DEFAULT_PARAGRAPH_SIZE, DEFAULT_SPACE_AFTER, DocumentBlock, HeadingLevel, ParagraphStyle,
};
pub use document_type::{DocumentType, InvalidDocumentType};
pub use generation_id::GenerationId;
pub use output_filename::{InvalidFilename, OutputFilename, safe_name};
pub use platform::{InvalidPlatform, Platform};
pub use project_details::ProjectDetails;
pub use render_context::{DEFAULT_CLIENT, RenderContext, UNTITLED_PROJECT};
pub use source_document::{ALLOWED_EXTENSIONS, SourceDocument, SourceFormat, extension_of};
pub use sow_analysis::{
    BackupPolicy, BackupRequirements, DrComponent, DrStrategy, ExecutiveSummary, MigrationPhase,
    MigrationPlan, NetworkDesign, Raci, RaciEntry, ScopedItem, Scope, Server, ServerMigration,
    SlaRequirement, SoftwareComponent, SolutionStrategy, SowAnalysis, Subnet, Workload,
};
