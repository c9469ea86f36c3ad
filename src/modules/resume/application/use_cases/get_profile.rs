use crate::resume::application::domain::entities::ResumeProfile;
use crate::resume::application::ports::outgoing::{ProfileRepository, ResumeRepositoryError};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum GetProfileError {
    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IGetProfileUseCase: Send + Sync {
    async fn execute(&self) -> Result<Option<ResumeProfile>, GetProfileError>;
}

pub struct GetProfileUseCase<R: ProfileRepository> {
    repository: R,
}

impl<R: ProfileRepository> GetProfileUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: ProfileRepository> IGetProfileUseCase for GetProfileUseCase<R> {
    async fn execute(&self) -> Result<Option<ResumeProfile>, GetProfileError> {
        self.repository
            .find()
            .await
            .map_err(|ResumeRepositoryError::DatabaseError(msg)| {
                GetProfileError::RepositoryError(msg)
            })
    }
}
