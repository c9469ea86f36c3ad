use crate::portfolio::application::domain::entities::ProjectDraft;
use crate::portfolio::application::ports::outgoing::{
    PortfolioRepository, PortfolioRepositoryError,
};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ReplaceProjectsError {
    #[error("{0}")]
    Validation(String),
    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IReplaceProjectsUseCase: Send + Sync {
    async fn execute(&self, projects: Vec<ProjectDraft>) -> Result<(), ReplaceProjectsError>;
}

pub struct ReplaceProjectsUseCase<R: PortfolioRepository> {
    repository: R,
}

impl<R: PortfolioRepository> ReplaceProjectsUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: PortfolioRepository> IReplaceProjectsUseCase for ReplaceProjectsUseCase<R> {
    async fn execute(&self, projects: Vec<ProjectDraft>) -> Result<(), ReplaceProjectsError> {
        if projects
            .iter()
            .any(|p| p.slug.trim().is_empty() || p.title.trim().is_empty())
        {
            return Err(ReplaceProjectsError::Validation(
                "slug and title must not be empty".to_string(),
            ));
        }
        self.repository
            .replace_all(projects)
            .await
            .map_err(|err| ReplaceProjectsError::RepositoryError(err.to_string()))
    }
}
