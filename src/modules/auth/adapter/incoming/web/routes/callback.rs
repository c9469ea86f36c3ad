use crate::auth::adapter::incoming::web::{LOGIN_PAGE, SESSION_COOKIE, STATE_COOKIE};
use crate::auth::application::use_cases::sign_in::SignInError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};
use actix_web::{get, http::header, web, HttpRequest, HttpResponse, Responder};
use chrono::Utc;
use serde::Deserialize;
use tracing::error;

#[derive(Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}

fn removal_cookie(name: &'static str) -> Cookie<'static> {
    let mut cookie = Cookie::new(name, "");
    cookie.set_path("/");
    cookie.make_removal();
    cookie
}

fn back_to_login(reason: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, format!("{}?error={}", LOGIN_PAGE, reason)))
        .cookie(removal_cookie(STATE_COOKIE))
        .finish()
}

/// OAuth callback
///
/// Verifies the state round-trip, exchanges the code for an identity, and on
/// an allow-listed login sets the session cookie and sends the browser to the
/// dashboard. Every rejection lands back on the login page with an `error`
/// query value.
#[utoipa::path(
    get,
    path = "/api/auth/callback",
    tag = "auth",
    responses(
        (status = 303, description = "Signed in, redirect to /admin"),
        (status = 302, description = "Rejected, redirect to the login page"),
    )
)]
#[get("/api/auth/callback")]
pub async fn oauth_callback_handler(
    req: HttpRequest,
    query: web::Query<CallbackQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();

    if query.error.is_some() {
        return back_to_login("AccessDenied");
    }

    let state_cookie = req.cookie(STATE_COOKIE).map(|c| c.value().to_string());
    match (&query.state, state_cookie) {
        (Some(sent), Some(held)) if *sent == held => {}
        _ => return back_to_login("StateMismatch"),
    }

    let code = match query.code {
        Some(code) => code,
        None => return back_to_login("OAuthCallback"),
    };

    match data.sign_in_use_case.execute(&code).await {
        Ok(issued) => {
            let remaining = (issued.expires_at - Utc::now()).num_seconds().max(0);
            let session_cookie = Cookie::build(SESSION_COOKIE, issued.token)
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax)
                .secure(data.cookie_secure)
                .max_age(CookieDuration::seconds(remaining))
                .finish();

            HttpResponse::SeeOther()
                .insert_header((header::LOCATION, "/admin"))
                .cookie(session_cookie)
                .cookie(removal_cookie(STATE_COOKIE))
                .finish()
        }
        Err(SignInError::IdentityRejected) => back_to_login("AccessDenied"),
        Err(SignInError::ProviderError(msg)) => {
            error!(error = %msg, "OAuth code exchange failed");
            back_to_login("OAuthCallback")
        }
        Err(SignInError::RepositoryError(msg)) => {
            error!(error = %msg, "session persistence failed during sign-in");
            ApiResponse::internal_error()
        }
    }
}
