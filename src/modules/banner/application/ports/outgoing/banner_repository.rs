use crate::banner::application::domain::entities::{Banner, BannerPatch, NewBanner};
use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BannerRepositoryError {
    #[error("banner not found")]
    NotFound,
    #[error("database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait BannerRepository: Send + Sync {
    /// Active banners ordered by `order` asc. Page scoping happens upstream.
    async fn find_active(&self) -> Result<Vec<Banner>, BannerRepositoryError>;

    /// Every banner, active or not, ordered by `order` asc.
    async fn find_all(&self) -> Result<Vec<Banner>, BannerRepositoryError>;

    async fn insert(&self, banner: NewBanner) -> Result<Banner, BannerRepositoryError>;

    async fn patch(&self, id: Uuid, patch: BannerPatch) -> Result<Banner, BannerRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), BannerRepositoryError>;
}
