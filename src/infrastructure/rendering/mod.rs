mod docx_renderer;

pub use docx_renderer::DocxRenderer;
