use crate::blog::application::ports::outgoing::{BlogRepository, BlogRepositoryError};
use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Error)]
pub enum DeletePostError {
    #[error("post not found")]
    NotFound,
    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IDeletePostUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), DeletePostError>;
}

pub struct DeletePostUseCase<R: BlogRepository> {
    repository: R,
}

impl<R: BlogRepository> DeletePostUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: BlogRepository> IDeletePostUseCase for DeletePostUseCase<R> {
    async fn execute(&self, id: Uuid) -> Result<(), DeletePostError> {
        self.repository.delete(id).await.map_err(|err| match err {
            BlogRepositoryError::NotFound => DeletePostError::NotFound,
            other => DeletePostError::RepositoryError(other.to_string()),
        })
    }
}
