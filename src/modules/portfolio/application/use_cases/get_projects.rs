use crate::portfolio::application::domain::entities::PortfolioProject;
use crate::portfolio::application::ports::outgoing::{
    PortfolioRepository, PortfolioRepositoryError,
};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum GetProjectsError {
    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IGetProjectsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<PortfolioProject>, GetProjectsError>;
}

pub struct GetProjectsUseCase<R: PortfolioRepository> {
    repository: R,
}

impl<R: PortfolioRepository> GetProjectsUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: PortfolioRepository> IGetProjectsUseCase for GetProjectsUseCase<R> {
    async fn execute(&self) -> Result<Vec<PortfolioProject>, GetProjectsError> {
        self.repository.find_all().await.map_err(|err| match err {
            PortfolioRepositoryError::NotFound => {
                GetProjectsError::RepositoryError("project not found".to_string())
            }
            PortfolioRepositoryError::DatabaseError(msg) => {
                GetProjectsError::RepositoryError(msg)
            }
        })
    }
}
