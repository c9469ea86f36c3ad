use actix_web::{
    dev::Payload, web, Error as ActixError, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use futures::future::LocalBoxFuture;

use crate::auth::adapter::incoming::web::{SessionGate, SESSION_COOKIE};
use crate::auth::application::domain::entities::AdminSession;
use crate::shared::api::ApiResponse;

/// The authenticated admin behind a request. Backs the protected routes that
/// sit outside the `/admin` and `/api/admin` prefixes; failure is the fixed
/// 401 body, matching the route middleware.
#[derive(Debug, Clone)]
pub struct AdminUser {
    pub username: String,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();

        Box::pin(async move {
            // The route middleware may already have resolved the session.
            if let Some(session) = req.extensions().get::<AdminSession>().cloned() {
                return Ok(AdminUser {
                    username: session.username,
                });
            }

            let gate = match req.app_data::<web::Data<SessionGate>>() {
                Some(gate) => gate.clone(),
                None => {
                    return Err(create_api_error(ApiResponse::internal_error()));
                }
            };

            let token = match req.cookie(SESSION_COOKIE) {
                Some(cookie) => cookie.value().to_string(),
                None => return Err(create_api_error(ApiResponse::unauthorized())),
            };

            match gate.execute(&token).await {
                Ok(Some(session)) => Ok(AdminUser {
                    username: session.username,
                }),
                Ok(None) => Err(create_api_error(ApiResponse::unauthorized())),
                Err(err) => {
                    tracing::error!("session lookup failed: {:?}", err);
                    Err(create_api_error(ApiResponse::internal_error()))
                }
            }
        })
    }
}
