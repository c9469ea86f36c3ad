use crate::banner::application::domain::entities::Banner;
use crate::banner::application::ports::outgoing::BannerRepository;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ListAllBannersError {
    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IListAllBannersUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Banner>, ListAllBannersError>;
}

pub struct ListAllBannersUseCase<R: BannerRepository> {
    repository: R,
}

impl<R: BannerRepository> ListAllBannersUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: BannerRepository> IListAllBannersUseCase for ListAllBannersUseCase<R> {
    async fn execute(&self) -> Result<Vec<Banner>, ListAllBannersError> {
        self.repository
            .find_all()
            .await
            .map_err(|err| ListAllBannersError::RepositoryError(err.to_string()))
    }
}
