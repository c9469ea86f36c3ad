use crate::auth::application::domain::entities::{NewSession, SessionRecord};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum SessionRepositoryError {
    #[error("database error: {0}")]
    DatabaseError(String),
}

/// Outgoing port for server-side session persistence. Sessions are rows in
/// the datastore; lookup happens on every gated request.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn insert(&self, session: NewSession) -> Result<(), SessionRepositoryError>;

    async fn find_by_token_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<SessionRecord>, SessionRepositoryError>;

    async fn delete_by_token_hash(&self, token_hash: &str) -> Result<(), SessionRepositoryError>;
}
