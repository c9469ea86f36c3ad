use crate::auth::adapter::incoming::web::STATE_COOKIE;
use crate::auth::application::services::session_token::generate_token;
use crate::AppState;
use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};
use actix_web::{get, http::header, web, HttpResponse, Responder};

/// Start the OAuth sign-in
///
/// Redirects the browser to the identity provider's authorize page and plants
/// the anti-CSRF state value in a short-lived cookie.
#[utoipa::path(
    get,
    path = "/api/auth/login",
    tag = "auth",
    responses(
        (status = 302, description = "Redirect to the identity provider"),
    )
)]
#[get("/api/auth/login")]
pub async fn oauth_login_handler(data: web::Data<AppState>) -> impl Responder {
    let state = generate_token();
    let authorize_url = data.oauth_provider.authorize_url(&state);

    let state_cookie = Cookie::build(STATE_COOKIE, state)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(data.cookie_secure)
        .max_age(CookieDuration::minutes(10))
        .finish();

    HttpResponse::Found()
        .insert_header((header::LOCATION, authorize_url))
        .cookie(state_cookie)
        .finish()
}
