use crate::auth::adapter::incoming::web::SESSION_COOKIE;
use crate::auth::application::use_cases::authenticate_session::AuthenticateSessionError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, HttpRequest, Responder};
use tracing::error;

/// Session introspection
///
/// Returns the signed-in admin's login and session expiry, or the fixed
/// unauthorized body when no valid session accompanies the request.
#[utoipa::path(
    get,
    path = "/api/auth/session",
    tag = "auth",
    responses(
        (status = 200, description = "Active session"),
        (status = 401, description = "No valid session"),
    )
)]
#[get("/api/auth/session")]
pub async fn session_handler(req: HttpRequest, data: web::Data<AppState>) -> impl Responder {
    let token = match req.cookie(SESSION_COOKIE) {
        Some(cookie) => cookie.value().to_string(),
        None => return ApiResponse::unauthorized(),
    };

    match data.session_gate.execute(&token).await {
        Ok(Some(session)) => ApiResponse::ok(session),
        Ok(None) => ApiResponse::unauthorized(),
        Err(AuthenticateSessionError::RepositoryError(msg)) => {
            error!(error = %msg, "session lookup failed");
            ApiResponse::internal_error()
        }
    }
}
