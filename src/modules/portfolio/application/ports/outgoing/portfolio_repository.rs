use crate::portfolio::application::domain::entities::{PortfolioProject, ProjectDraft};
use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortfolioRepositoryError {
    #[error("project not found")]
    NotFound,
    #[error("database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait PortfolioRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<PortfolioProject>, PortfolioRepositoryError>;

    /// Transactional whole-collection replace; slice position becomes `order`.
    async fn replace_all(&self, projects: Vec<ProjectDraft>)
        -> Result<(), PortfolioRepositoryError>;

    /// Deletes one project; `NotFound` when the id does not exist.
    async fn delete(&self, id: Uuid) -> Result<(), PortfolioRepositoryError>;
}
