use crate::auth::application::domain::entities::{IssuedSession, NewSession};
use crate::auth::application::ports::outgoing::{
    OAuthProvider, OAuthProviderError, SessionRepository, SessionRepositoryError,
};
use crate::auth::application::services::allow_list::AllowList;
use crate::auth::application::services::session_token::{generate_token, hash_token};
use async_trait::async_trait;
use chrono::{Duration, Utc};

#[derive(Debug, Clone)]
pub enum SignInError {
    /// The provider authenticated the user, but the login is not on the
    /// allow-list. No session is created.
    IdentityRejected,
    ProviderError(String),
    RepositoryError(String),
}

#[async_trait]
pub trait ISignInUseCase: Send + Sync {
    async fn execute(&self, code: &str) -> Result<IssuedSession, SignInError>;
}

pub struct SignInUseCase<P: OAuthProvider, R: SessionRepository> {
    provider: P,
    repository: R,
    allow_list: AllowList,
    session_ttl: Duration,
}

impl<P: OAuthProvider, R: SessionRepository> SignInUseCase<P, R> {
    pub fn new(provider: P, repository: R, allow_list: AllowList, session_ttl: Duration) -> Self {
        Self {
            provider,
            repository,
            allow_list,
            session_ttl,
        }
    }
}

#[async_trait]
impl<P, R> ISignInUseCase for SignInUseCase<P, R>
where
    P: OAuthProvider + Send + Sync,
    R: SessionRepository + Send + Sync,
{
    async fn execute(&self, code: &str) -> Result<IssuedSession, SignInError> {
        let identity = self.provider.exchange_code(code).await.map_err(|err| {
            let message = match &err {
                OAuthProviderError::ExchangeFailed(msg) => msg.clone(),
                OAuthProviderError::IdentityLookupFailed(msg) => msg.clone(),
            };
            SignInError::ProviderError(message)
        })?;

        if !self.allow_list.permits(&identity.username) {
            tracing::warn!(login = %identity.username, "sign-in rejected: login not allow-listed");
            return Err(SignInError::IdentityRejected);
        }

        let token = generate_token();
        let expires_at = Utc::now() + self.session_ttl;

        self.repository
            .insert(NewSession {
                token_hash: hash_token(&token),
                username: identity.username.clone(),
                expires_at,
            })
            .await
            .map_err(|SessionRepositoryError::DatabaseError(msg)| {
                SignInError::RepositoryError(msg)
            })?;

        Ok(IssuedSession {
            token,
            username: identity.username,
            expires_at,
        })
    }
}
