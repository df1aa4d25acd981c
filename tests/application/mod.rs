mod analysis_service_test;
mod assembler_test;
mod fallback_analysis_test;
mod generation_service_test;
mod normalizer_test;
mod response_parser_test;
