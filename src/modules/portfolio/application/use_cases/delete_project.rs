use crate::portfolio::application::ports::outgoing::{
    PortfolioRepository, PortfolioRepositoryError,
};
use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Error)]
pub enum DeleteProjectError {
    #[error("project not found")]
    NotFound,
    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IDeleteProjectUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), DeleteProjectError>;
}

pub struct DeleteProjectUseCase<R: PortfolioRepository> {
    repository: R,
}

impl<R: PortfolioRepository> DeleteProjectUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: PortfolioRepository> IDeleteProjectUseCase for DeleteProjectUseCase<R> {
    async fn execute(&self, id: Uuid) -> Result<(), DeleteProjectError> {
        self.repository.delete(id).await.map_err(|err| match err {
            PortfolioRepositoryError::NotFound => DeleteProjectError::NotFound,
            PortfolioRepositoryError::DatabaseError(msg) => {
                DeleteProjectError::RepositoryError(msg)
            }
        })
    }
}
