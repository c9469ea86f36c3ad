use crate::resume::application::domain::entities::SkillGroup;
use crate::resume::application::ports::outgoing::{ResumeRepositoryError, SkillRepository};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum GetSkillsError {
    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IGetSkillsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<SkillGroup>, GetSkillsError>;
}

pub struct GetSkillsUseCase<R: SkillRepository> {
    repository: R,
}

impl<R: SkillRepository> GetSkillsUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: SkillRepository> IGetSkillsUseCase for GetSkillsUseCase<R> {
    async fn execute(&self) -> Result<Vec<SkillGroup>, GetSkillsError> {
        self.repository
            .find_all()
            .await
            .map_err(|ResumeRepositoryError::DatabaseError(msg)| {
                GetSkillsError::RepositoryError(msg)
            })
    }
}
