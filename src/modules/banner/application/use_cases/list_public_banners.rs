use crate::banner::application::domain::entities::Banner;
use crate::banner::application::ports::outgoing::{BannerRepository, BannerRepositoryError};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ListPublicBannersError {
    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IListPublicBannersUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Banner>, ListPublicBannersError>;
}

pub struct ListPublicBannersUseCase<R: BannerRepository> {
    repository: R,
}

impl<R: BannerRepository> ListPublicBannersUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: BannerRepository> IListPublicBannersUseCase for ListPublicBannersUseCase<R> {
    async fn execute(&self) -> Result<Vec<Banner>, ListPublicBannersError> {
        self.repository
            .find_active()
            .await
            .map_err(|err| ListPublicBannersError::RepositoryError(err.to_string()))
    }
}
