use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("content exceeds the {max} byte preview limit")]
    TooLarge { max: usize },
    #[error("render error: {0}")]
    Failed(String),
}

/// Markdown-to-HTML rendering behind the preview endpoint. Implementations
/// must strip raw HTML from the output.
pub trait MarkdownRenderer: Send + Sync {
    fn render(&self, content: &str) -> Result<String, RenderError>;
}
