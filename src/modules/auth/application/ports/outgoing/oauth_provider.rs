use crate::auth::application::domain::entities::OAuthIdentity;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum OAuthProviderError {
    #[error("code exchange failed: {0}")]
    ExchangeFailed(String),
    #[error("identity lookup failed: {0}")]
    IdentityLookupFailed(String),
}

/// Outgoing port for the external identity provider. The upstream exchange
/// is delegated entirely; the application only sees the resulting login.
#[async_trait]
pub trait OAuthProvider: Send + Sync {
    /// The provider URL the browser is redirected to at sign-in start.
    fn authorize_url(&self, state: &str) -> String;

    /// Exchanges an authorization code for the authenticated identity.
    async fn exchange_code(&self, code: &str) -> Result<OAuthIdentity, OAuthProviderError>;
}
