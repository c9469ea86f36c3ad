use crate::auth::adapter::incoming::web::SESSION_COOKIE;
use crate::auth::application::use_cases::sign_out::SignOutError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::cookie::Cookie;
use actix_web::{post, web, HttpRequest, Responder};
use tracing::error;

/// Sign out
///
/// Deletes the server-side session row and expires the cookie. Signing out
/// without a session is a no-op success.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    responses(
        (status = 200, description = "Signed out"),
        (status = 500, description = "Session store unavailable"),
    )
)]
#[post("/api/auth/logout")]
pub async fn logout_handler(req: HttpRequest, data: web::Data<AppState>) -> impl Responder {
    if let Some(cookie) = req.cookie(SESSION_COOKIE) {
        if let Err(SignOutError::RepositoryError(msg)) =
            data.sign_out_use_case.execute(cookie.value()).await
        {
            error!(error = %msg, "session deletion failed during sign-out");
            return ApiResponse::internal_error();
        }
    }

    let mut expired = Cookie::new(SESSION_COOKIE, "");
    expired.set_path("/");
    expired.make_removal();

    let mut response = ApiResponse::success();
    if let Err(err) = response.add_cookie(&expired) {
        error!(error = %err, "failed to attach removal cookie");
    }
    response
}
