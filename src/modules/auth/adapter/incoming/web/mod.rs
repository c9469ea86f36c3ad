pub mod extractors;
pub mod middleware;
pub mod routes;

use crate::auth::application::use_cases::authenticate_session::IAuthenticateSessionUseCase;
use std::sync::Arc;

/// HttpOnly cookie carrying the opaque session token.
pub const SESSION_COOKIE: &str = "admin_session";
/// Short-lived cookie holding the OAuth state value during the redirect
/// round-trip.
pub const STATE_COOKIE: &str = "oauth_state";
/// Unauthenticated admin page requests are redirected here.
pub const LOGIN_PAGE: &str = "/admin/login";

/// The session gate as shared by the middleware, the extractor and the
/// session introspection route.
pub type SessionGate = Arc<dyn IAuthenticateSessionUseCase + Send + Sync>;
