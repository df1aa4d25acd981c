mod docx_renderer_test;
mod file_loader_test;
mod gemini_client_test;
mod local_store_test;
mod observability_test;
mod text_sanitizer_test;
