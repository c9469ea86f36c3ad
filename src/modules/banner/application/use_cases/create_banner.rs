use crate::banner::application::domain::entities::{Banner, NewBanner};
use crate::banner::application::ports::outgoing::{BannerRepository, BannerRepositoryError};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum CreateBannerError {
    #[error("{0}")]
    Validation(String),
    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ICreateBannerUseCase: Send + Sync {
    async fn execute(&self, banner: NewBanner) -> Result<Banner, CreateBannerError>;
}

pub struct CreateBannerUseCase<R: BannerRepository> {
    repository: R,
}

impl<R: BannerRepository> CreateBannerUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: BannerRepository> ICreateBannerUseCase for CreateBannerUseCase<R> {
    async fn execute(&self, banner: NewBanner) -> Result<Banner, CreateBannerError> {
        if banner.message.trim().is_empty() {
            return Err(CreateBannerError::Validation(
                "message must not be empty".to_string(),
            ));
        }

        self.repository
            .insert(banner)
            .await
            .map_err(|err| CreateBannerError::RepositoryError(err.to_string()))
    }
}
