use crate::blog::application::domain::entities::BlogPost;
use crate::blog::application::ports::outgoing::{BlogRepository, BlogRepositoryError};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum GetPostBySlugError {
    #[error("repository error: {0}")]
    RepositoryError(String),
}

/// Public article lookup. Drafts resolve to `None` so an unpublished
/// slug is indistinguishable from a missing one.
#[async_trait]
pub trait IGetPostBySlugUseCase: Send + Sync {
    async fn execute(&self, slug: &str) -> Result<Option<BlogPost>, GetPostBySlugError>;
}

pub struct GetPostBySlugUseCase<R: BlogRepository> {
    repository: R,
}

impl<R: BlogRepository> GetPostBySlugUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: BlogRepository> IGetPostBySlugUseCase for GetPostBySlugUseCase<R> {
    async fn execute(&self, slug: &str) -> Result<Option<BlogPost>, GetPostBySlugError> {
        let post = self
            .repository
            .find_by_slug(slug)
            .await
            .map_err(|err| GetPostBySlugError::RepositoryError(err.to_string()))?;

        Ok(post.filter(|post| post.published))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blog::application::domain::entities::{NewPost, PostUpdate};
    use chrono::Utc;
    use uuid::Uuid;

    struct MockBlogRepository {
        post: Option<BlogPost>,
    }

    #[async_trait]
    impl BlogRepository for MockBlogRepository {
        async fn find_all(
            &self,
            _published_only: bool,
        ) -> Result<Vec<BlogPost>, BlogRepositoryError> {
            Ok(vec![])
        }

        async fn find_by_slug(
            &self,
            _slug: &str,
        ) -> Result<Option<BlogPost>, BlogRepositoryError> {
            Ok(self.post.clone())
        }

        async fn insert(&self, _post: NewPost) -> Result<BlogPost, BlogRepositoryError> {
            Err(BlogRepositoryError::DatabaseError("unused".to_string()))
        }

        async fn update(
            &self,
            _id: Uuid,
            _update: PostUpdate,
        ) -> Result<BlogPost, BlogRepositoryError> {
            Err(BlogRepositoryError::DatabaseError("unused".to_string()))
        }

        async fn delete(&self, _id: Uuid) -> Result<(), BlogRepositoryError> {
            Ok(())
        }
    }

    fn post(published: bool) -> BlogPost {
        BlogPost {
            id: Uuid::new_v4(),
            slug: "hello-world".to_string(),
            title: "Hello".to_string(),
            excerpt: "First".to_string(),
            content: "# Hello".to_string(),
            tags: vec![],
            published,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_published_post_is_returned() {
        let use_case = GetPostBySlugUseCase::new(MockBlogRepository {
            post: Some(post(true)),
        });

        let found = use_case.execute("hello-world").await.unwrap();
        assert_eq!(found.unwrap().slug, "hello-world");
    }

    #[tokio::test]
    async fn test_draft_resolves_to_none() {
        let use_case = GetPostBySlugUseCase::new(MockBlogRepository {
            post: Some(post(false)),
        });

        assert!(use_case.execute("hello-world").await.unwrap().is_none());
    }
}
