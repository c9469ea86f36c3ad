pub mod oauth_provider;
pub mod session_repository;

pub use oauth_provider::{OAuthProvider, OAuthProviderError};
pub use session_repository::{SessionRepository, SessionRepositoryError};
