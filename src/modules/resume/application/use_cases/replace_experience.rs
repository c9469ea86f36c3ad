use crate::resume::application::domain::entities::WorkExperienceDraft;
use crate::resume::application::ports::outgoing::{ExperienceRepository, ResumeRepositoryError};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ReplaceExperienceError {
    #[error("{0}")]
    Validation(String),
    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IReplaceExperienceUseCase: Send + Sync {
    async fn execute(
        &self,
        experiences: Vec<WorkExperienceDraft>,
    ) -> Result<(), ReplaceExperienceError>;
}

pub struct ReplaceExperienceUseCase<R: ExperienceRepository> {
    repository: R,
}

impl<R: ExperienceRepository> ReplaceExperienceUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: ExperienceRepository> IReplaceExperienceUseCase for ReplaceExperienceUseCase<R> {
    async fn execute(
        &self,
        experiences: Vec<WorkExperienceDraft>,
    ) -> Result<(), ReplaceExperienceError> {
        if experiences
            .iter()
            .any(|e| e.company.trim().is_empty() || e.title.trim().is_empty())
        {
            return Err(ReplaceExperienceError::Validation(
                "company and title must not be empty".to_string(),
            ));
        }
        self.repository
            .replace_all(experiences)
            .await
            .map_err(|ResumeRepositoryError::DatabaseError(msg)| {
                ReplaceExperienceError::RepositoryError(msg)
            })
    }
}
