use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header,
    Error as ActixError, HttpMessage, HttpResponse,
};
use futures::future::{ok, LocalBoxFuture, Ready};

use crate::auth::adapter::incoming::web::{SessionGate, LOGIN_PAGE, SESSION_COOKIE};
use crate::auth::application::use_cases::authenticate_session::AuthenticateSessionError;
use crate::shared::api::ApiResponse;

/// Route authorization for the `/admin` and `/api/admin` prefixes.
///
/// One synchronous decision per request: unauthenticated API requests are
/// answered `401 {"error":"Unauthorized"}` without reaching the handler,
/// unauthenticated page requests are redirected to the login page, and
/// everything else passes through. A resolved session is stored in request
/// extensions for downstream extractors.
pub struct AdminGate {
    gate: SessionGate,
}

impl AdminGate {
    pub fn new(gate: SessionGate) -> Self {
        Self { gate }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AdminGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = ActixError;
    type Transform = AdminGateMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AdminGateMiddleware {
            service: Rc::new(service),
            gate: self.gate.clone(),
        })
    }
}

pub struct AdminGateMiddleware<S> {
    service: Rc<S>,
    gate: SessionGate,
}

impl<S, B> Service<ServiceRequest> for AdminGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let gate = self.gate.clone();

        Box::pin(async move {
            let path = req.path().to_string();
            if !is_gated_path(&path) {
                return pass_through(service, req).await;
            }

            let token = req.cookie(SESSION_COOKIE).map(|c| c.value().to_string());
            let session = match token {
                Some(token) => match gate.execute(&token).await {
                    Ok(session) => session,
                    Err(AuthenticateSessionError::RepositoryError(msg)) => {
                        // Lookup failure denies access rather than erroring.
                        tracing::error!("session lookup failed: {}", msg);
                        None
                    }
                },
                None => None,
            };

            match session {
                Some(session) => {
                    req.extensions_mut().insert(session);
                    pass_through(service, req).await
                }
                None => {
                    let response = if path.starts_with("/api/") {
                        ApiResponse::unauthorized()
                    } else {
                        HttpResponse::Found()
                            .insert_header((header::LOCATION, LOGIN_PAGE))
                            .finish()
                    };
                    Ok(req.into_response(response).map_into_right_body())
                }
            }
        })
    }
}

async fn pass_through<S, B>(
    service: Rc<S>,
    req: ServiceRequest,
) -> Result<ServiceResponse<EitherBody<B>>, ActixError>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
{
    service.call(req).await.map(|res| res.map_into_left_body())
}

/// The login page is always allowed; identity-provider callbacks live under
/// `/api/auth` and never match the gated prefixes.
fn is_gated_path(path: &str) -> bool {
    if path == LOGIN_PAGE {
        return false;
    }
    path == "/admin"
        || path.starts_with("/admin/")
        || path == "/api/admin"
        || path.starts_with("/api/admin/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::domain::entities::AdminSession;
    use crate::auth::application::use_cases::authenticate_session::IAuthenticateSessionUseCase;
    use actix_web::cookie::Cookie;
    use actix_web::{test, web, App, Responder};
    use async_trait::async_trait;
    use chrono::{Duration, Utc};
    use serde_json::json;
    use std::sync::Arc;

    struct StubGate {
        valid_token: &'static str,
    }

    #[async_trait]
    impl IAuthenticateSessionUseCase for StubGate {
        async fn execute(
            &self,
            token: &str,
        ) -> Result<Option<AdminSession>, AuthenticateSessionError> {
            if token == self.valid_token {
                Ok(Some(AdminSession {
                    username: "octocat".to_string(),
                    expires_at: Utc::now() + Duration::hours(1),
                }))
            } else {
                Ok(None)
            }
        }
    }

    async fn plain_ok() -> impl Responder {
        ApiResponse::ok(json!({ "ok": true }))
    }

    fn gated_app_gate() -> SessionGate {
        Arc::new(StubGate {
            valid_token: "valid-token",
        })
    }

    macro_rules! gated_app {
        () => {
            test::init_service(
                App::new()
                    .wrap(AdminGate::new(gated_app_gate()))
                    .route("/api/admin/banners", web::get().to(plain_ok))
                    .route("/admin", web::get().to(plain_ok))
                    .route("/admin/login", web::get().to(plain_ok))
                    .route("/api/banners", web::get().to(plain_ok)),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_admin_api_without_session_is_401_with_fixed_body() {
        let app = gated_app!();

        let req = test::TestRequest::get()
            .uri("/api/admin/banners")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error": "Unauthorized" }));
    }

    #[actix_web::test]
    async fn test_admin_page_without_session_redirects_to_login() {
        let app = gated_app!();

        let req = test::TestRequest::get().uri("/admin").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 302);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "/admin/login"
        );
    }

    #[actix_web::test]
    async fn test_login_page_is_always_allowed() {
        let app = gated_app!();

        let req = test::TestRequest::get().uri("/admin/login").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
    }

    #[actix_web::test]
    async fn test_public_paths_are_not_gated() {
        let app = gated_app!();

        let req = test::TestRequest::get().uri("/api/banners").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
    }

    #[actix_web::test]
    async fn test_valid_session_passes_through() {
        let app = gated_app!();

        let req = test::TestRequest::get()
            .uri("/api/admin/banners")
            .cookie(Cookie::new(SESSION_COOKIE, "valid-token"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
    }

    #[actix_web::test]
    async fn test_stale_cookie_is_rejected() {
        let app = gated_app!();

        let req = test::TestRequest::get()
            .uri("/api/admin/banners")
            .cookie(Cookie::new(SESSION_COOKIE, "stale-token"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn test_gated_path_predicate() {
        assert!(is_gated_path("/admin"));
        assert!(is_gated_path("/admin/resume"));
        assert!(is_gated_path("/api/admin"));
        assert!(is_gated_path("/api/admin/banners"));
        assert!(!is_gated_path("/admin/login"));
        assert!(!is_gated_path("/api/auth/callback"));
        assert!(!is_gated_path("/api/banners"));
        assert!(!is_gated_path("/administrator"));
        assert!(!is_gated_path("/"));
    }
}
