use crate::banner::application::domain::entities::{Banner, BannerPatch};
use crate::banner::application::ports::outgoing::{BannerRepository, BannerRepositoryError};
use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Error)]
pub enum PatchBannerError {
    #[error("{0}")]
    Validation(String),
    #[error("banner not found")]
    NotFound,
    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IPatchBannerUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, patch: BannerPatch) -> Result<Banner, PatchBannerError>;
}

pub struct PatchBannerUseCase<R: BannerRepository> {
    repository: R,
}

impl<R: BannerRepository> PatchBannerUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: BannerRepository> IPatchBannerUseCase for PatchBannerUseCase<R> {
    async fn execute(&self, id: Uuid, patch: BannerPatch) -> Result<Banner, PatchBannerError> {
        if let Some(message) = &patch.message {
            if message.trim().is_empty() {
                return Err(PatchBannerError::Validation(
                    "message must not be empty".to_string(),
                ));
            }
        }

        self.repository
            .patch(id, patch)
            .await
            .map_err(|err| match err {
                BannerRepositoryError::NotFound => PatchBannerError::NotFound,
                other => PatchBannerError::RepositoryError(other.to_string()),
            })
    }
}
