use crate::auth::application::ports::outgoing::{SessionRepository, SessionRepositoryError};
use crate::auth::application::services::session_token::hash_token;
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub enum SignOutError {
    RepositoryError(String),
}

#[async_trait]
pub trait ISignOutUseCase: Send + Sync {
    async fn execute(&self, token: &str) -> Result<(), SignOutError>;
}

pub struct SignOutUseCase<R: SessionRepository> {
    repository: R,
}

impl<R: SessionRepository> SignOutUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: SessionRepository + Send + Sync> ISignOutUseCase for SignOutUseCase<R> {
    /// Deleting an unknown token is a no-op; sign-out is idempotent.
    async fn execute(&self, token: &str) -> Result<(), SignOutError> {
        self.repository
            .delete_by_token_hash(&hash_token(token))
            .await
            .map_err(|SessionRepositoryError::DatabaseError(msg)| {
                SignOutError::RepositoryError(msg)
            })
    }
}
