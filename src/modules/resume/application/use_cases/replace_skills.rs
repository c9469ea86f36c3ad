use crate::resume::application::domain::entities::SkillGroupDraft;
use crate::resume::application::ports::outgoing::{ResumeRepositoryError, SkillRepository};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ReplaceSkillsError {
    #[error("{0}")]
    Validation(String),
    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IReplaceSkillsUseCase: Send + Sync {
    async fn execute(&self, groups: Vec<SkillGroupDraft>) -> Result<(), ReplaceSkillsError>;
}

pub struct ReplaceSkillsUseCase<R: SkillRepository> {
    repository: R,
}

impl<R: SkillRepository> ReplaceSkillsUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: SkillRepository> IReplaceSkillsUseCase for ReplaceSkillsUseCase<R> {
    async fn execute(&self, groups: Vec<SkillGroupDraft>) -> Result<(), ReplaceSkillsError> {
        if groups.iter().any(|g| g.category.trim().is_empty()) {
            return Err(ReplaceSkillsError::Validation(
                "category must not be empty".to_string(),
            ));
        }
        self.repository
            .replace_all(groups)
            .await
            .map_err(|ResumeRepositoryError::DatabaseError(msg)| {
                ReplaceSkillsError::RepositoryError(msg)
            })
    }
}
