use crate::blog::application::domain::entities::{BlogPost, PostUpdate};
use crate::blog::application::ports::outgoing::{BlogRepository, BlogRepositoryError};
use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, Error)]
pub enum UpdatePostError {
    #[error("{0}")]
    Validation(String),
    #[error("post not found")]
    NotFound,
    #[error("a post with this slug already exists")]
    DuplicateSlug,
    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IUpdatePostUseCase: Send + Sync {
    async fn execute(&self, id: Uuid, update: PostUpdate) -> Result<BlogPost, UpdatePostError>;
}

pub struct UpdatePostUseCase<R: BlogRepository> {
    repository: R,
}

impl<R: BlogRepository> UpdatePostUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: BlogRepository> IUpdatePostUseCase for UpdatePostUseCase<R> {
    async fn execute(&self, id: Uuid, update: PostUpdate) -> Result<BlogPost, UpdatePostError> {
        if update.slug.trim().is_empty() {
            return Err(UpdatePostError::Validation(
                "slug must not be empty".to_string(),
            ));
        }
        if update.title.trim().is_empty() {
            return Err(UpdatePostError::Validation(
                "title must not be empty".to_string(),
            ));
        }

        self.repository
            .update(id, update)
            .await
            .map_err(|err| match err {
                BlogRepositoryError::NotFound => UpdatePostError::NotFound,
                BlogRepositoryError::DuplicateSlug => UpdatePostError::DuplicateSlug,
                other => UpdatePostError::RepositoryError(other.to_string()),
            })
    }
}
