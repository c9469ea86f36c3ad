use crate::blog::application::domain::entities::{BlogPost, NewPost, PostUpdate};
use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlogRepositoryError {
    #[error("post not found")]
    NotFound,
    #[error("slug already in use")]
    DuplicateSlug,
    #[error("database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Newest first. `published_only` filters drafts out.
    async fn find_all(&self, published_only: bool) -> Result<Vec<BlogPost>, BlogRepositoryError>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, BlogRepositoryError>;

    async fn insert(&self, post: NewPost) -> Result<BlogPost, BlogRepositoryError>;

    async fn update(&self, id: Uuid, update: PostUpdate) -> Result<BlogPost, BlogRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), BlogRepositoryError>;
}
