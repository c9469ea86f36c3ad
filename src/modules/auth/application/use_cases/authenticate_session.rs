use crate::auth::application::domain::entities::AdminSession;
use crate::auth::application::ports::outgoing::{SessionRepository, SessionRepositoryError};
use crate::auth::application::services::session_token::hash_token;
use async_trait::async_trait;
use chrono::Utc;

#[derive(Debug, Clone)]
pub enum AuthenticateSessionError {
    RepositoryError(String),
}

/// The session gate: a bearer token either resolves to one valid
/// admin session, or to nothing. Expired rows resolve to nothing.
#[async_trait]
pub trait IAuthenticateSessionUseCase: Send + Sync {
    async fn execute(&self, token: &str) -> Result<Option<AdminSession>, AuthenticateSessionError>;
}

pub struct AuthenticateSessionUseCase<R: SessionRepository> {
    repository: R,
}

impl<R: SessionRepository> AuthenticateSessionUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R: SessionRepository + Send + Sync> IAuthenticateSessionUseCase
    for AuthenticateSessionUseCase<R>
{
    async fn execute(&self, token: &str) -> Result<Option<AdminSession>, AuthenticateSessionError> {
        let record = self
            .repository
            .find_by_token_hash(&hash_token(token))
            .await
            .map_err(|SessionRepositoryError::DatabaseError(msg)| {
                AuthenticateSessionError::RepositoryError(msg)
            })?;

        Ok(record
            .filter(|session| session.expires_at > Utc::now())
            .map(|session| AdminSession {
                username: session.username,
                expires_at: session.expires_at,
            }))
    }
}
