use crate::blog::application::domain::entities::{BlogPost, NewPost};
use crate::blog::application::ports::outgoing::{BlogRepository, BlogRepositoryError};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum CreatePostError {
    #[error("{0}")]
    Validation(String),
    #[error("a post with this slug already exists")]
    DuplicateSlug,
    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ICreatePostUseCase: Send + Sync {
    async fn execute(&self, post: NewPost) -> Result<BlogPost, CreatePostError>;
}

pub struct CreatePostUseCase<R: BlogRepository> {
    repository: R,
}

impl<R: BlogRepository> CreatePostUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: BlogRepository> ICreatePostUseCase for CreatePostUseCase<R> {
    async fn execute(&self, post: NewPost) -> Result<BlogPost, CreatePostError> {
        if post.slug.trim().is_empty() {
            return Err(CreatePostError::Validation(
                "slug must not be empty".to_string(),
            ));
        }
        if post.title.trim().is_empty() {
            return Err(CreatePostError::Validation(
                "title must not be empty".to_string(),
            ));
        }
        if post.content.trim().is_empty() {
            return Err(CreatePostError::Validation(
                "content must not be empty".to_string(),
            ));
        }

        self.repository.insert(post).await.map_err(|err| match err {
            BlogRepositoryError::DuplicateSlug => CreatePostError::DuplicateSlug,
            other => CreatePostError::RepositoryError(other.to_string()),
        })
    }
}
