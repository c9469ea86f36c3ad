use crate::markdown::application::ports::outgoing::{MarkdownRenderer, RenderError};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum PreviewMarkdownError {
    #[error("{0}")]
    Render(String),
}

#[async_trait]
pub trait IPreviewMarkdownUseCase: Send + Sync {
    async fn execute(&self, content: &str) -> Result<String, PreviewMarkdownError>;
}

pub struct PreviewMarkdownUseCase<R: MarkdownRenderer> {
    renderer: R,
}

impl<R: MarkdownRenderer> PreviewMarkdownUseCase<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }
}

#[async_trait]
impl<R: MarkdownRenderer> IPreviewMarkdownUseCase for PreviewMarkdownUseCase<R> {
    async fn execute(&self, content: &str) -> Result<String, PreviewMarkdownError> {
        self.renderer
            .render(content)
            .map_err(|err: RenderError| PreviewMarkdownError::Render(err.to_string()))
    }
}
