use crate::resume::application::domain::entities::EducationEntry;
use crate::resume::application::ports::outgoing::{EducationRepository, ResumeRepositoryError};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum GetEducationError {
    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IGetEducationUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<EducationEntry>, GetEducationError>;
}

pub struct GetEducationUseCase<R: EducationRepository> {
    repository: R,
}

impl<R: EducationRepository> GetEducationUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: EducationRepository> IGetEducationUseCase for GetEducationUseCase<R> {
    async fn execute(&self) -> Result<Vec<EducationEntry>, GetEducationError> {
        self.repository
            .find_all()
            .await
            .map_err(|ResumeRepositoryError::DatabaseError(msg)| {
                GetEducationError::RepositoryError(msg)
            })
    }
}
