use crate::banner::application::ports::outgoing::{BannerRepository, BannerRepositoryError};
use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Error)]
pub enum DeleteBannerError {
    #[error("banner not found")]
    NotFound,
    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IDeleteBannerUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), DeleteBannerError>;
}

pub struct DeleteBannerUseCase<R: BannerRepository> {
    repository: R,
}

impl<R: BannerRepository> DeleteBannerUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: BannerRepository> IDeleteBannerUseCase for DeleteBannerUseCase<R> {
    async fn execute(&self, id: Uuid) -> Result<(), DeleteBannerError> {
        self.repository.delete(id).await.map_err(|err| match err {
            BannerRepositoryError::NotFound => DeleteBannerError::NotFound,
            other => DeleteBannerError::RepositoryError(other.to_string()),
        })
    }
}
