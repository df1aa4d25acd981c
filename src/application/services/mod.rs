mod analysis_service;
mod assembler;
mod fallback_analysis;
mod generation_service;
mod normalizer;
mod prompt;
mod response_parser;

pub use analysis_service::{AnalysisError, AnalysisService};
pub use assembler::{
    Blocks, assemble, assemble_hld, assemble_lld, component_description, project_short_name, rows,
    usable_ips,
};
pub use fallback_analysis::fallback_analysis;
pub use generation_service::{
    GeneratedDocument, GenerationError, GenerationRequest, GenerationService,
};
pub use normalizer::normalize;
pub use prompt::build_analysis_prompt;
pub use response_parser::{UnparseableResponse, parse_analysis_response};
