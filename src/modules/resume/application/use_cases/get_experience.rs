use crate::resume::application::domain::entities::WorkExperience;
use crate::resume::application::ports::outgoing::{ExperienceRepository, ResumeRepositoryError};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum GetExperienceError {
    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IGetExperienceUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<WorkExperience>, GetExperienceError>;
}

pub struct GetExperienceUseCase<R: ExperienceRepository> {
    repository: R,
}

impl<R: ExperienceRepository> GetExperienceUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: ExperienceRepository> IGetExperienceUseCase for GetExperienceUseCase<R> {
    async fn execute(&self) -> Result<Vec<WorkExperience>, GetExperienceError> {
        self.repository
            .find_all()
            .await
            .map_err(|ResumeRepositoryError::DatabaseError(msg)| {
                GetExperienceError::RepositoryError(msg)
            })
    }
}
