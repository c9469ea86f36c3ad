use crate::blog::application::domain::entities::BlogPost;
use crate::blog::application::ports::outgoing::{BlogRepository, BlogRepositoryError};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ListPostsError {
    #[error("repository error: {0}")]
    RepositoryError(String),
}

/// `include_drafts` is granted by an admin session; anonymous callers
/// only see published posts.
#[async_trait]
pub trait IListPostsUseCase: Send + Sync {
    async fn execute(&self, include_drafts: bool) -> Result<Vec<BlogPost>, ListPostsError>;
}

pub struct ListPostsUseCase<R: BlogRepository> {
    repository: R,
}

impl<R: BlogRepository> ListPostsUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: BlogRepository> IListPostsUseCase for ListPostsUseCase<R> {
    async fn execute(&self, include_drafts: bool) -> Result<Vec<BlogPost>, ListPostsError> {
        self.repository
            .find_all(!include_drafts)
            .await
            .map_err(|err| ListPostsError::RepositoryError(err.to_string()))
    }
}
