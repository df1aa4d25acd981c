mod output_filename_test;
mod platform_test;
mod project_details_test;
mod render_context_test;
mod source_document_test;
