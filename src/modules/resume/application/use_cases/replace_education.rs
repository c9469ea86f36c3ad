use crate::resume::application::domain::entities::EducationEntryDraft;
use crate::resume::application::ports::outgoing::{EducationRepository, ResumeRepositoryError};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ReplaceEducationError {
    #[error("{0}")]
    Validation(String),
    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IReplaceEducationUseCase: Send + Sync {
    async fn execute(&self, entries: Vec<EducationEntryDraft>)
        -> Result<(), ReplaceEducationError>;
}

pub struct ReplaceEducationUseCase<R: EducationRepository> {
    repository: R,
}

impl<R: EducationRepository> ReplaceEducationUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: EducationRepository> IReplaceEducationUseCase for ReplaceEducationUseCase<R> {
    async fn execute(
        &self,
        entries: Vec<EducationEntryDraft>,
    ) -> Result<(), ReplaceEducationError> {
        if entries
            .iter()
            .any(|e| e.school.trim().is_empty() || e.degree.trim().is_empty())
        {
            return Err(ReplaceEducationError::Validation(
                "school and degree must not be empty".to_string(),
            ));
        }
        self.repository
            .replace_all(entries)
            .await
            .map_err(|ResumeRepositoryError::DatabaseError(msg)| {
                ReplaceEducationError::RepositoryError(msg)
            })
    }
}
