// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;
use serde_json::json;

/// Error body used by every failing endpoint: `{"error": "<message>"}`.
#[derive(Serialize, Clone, Debug)]
pub struct ErrorBody {
    pub error: String,
}

/// Response builders for the fixed wire contract: successful responses are
/// the bare JSON of the affected record(s); bulk and delete operations
/// answer `{"success": true}`; failures answer `{"error": "<message>"}`.
pub struct ApiResponse;

impl ApiResponse {
    pub fn ok<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Ok().json(data)
    }

    pub fn created<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Created().json(data)
    }

    pub fn success() -> HttpResponse {
        HttpResponse::Ok().json(json!({ "success": true }))
    }

    pub fn error(status: StatusCode, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ErrorBody {
            error: message.to_string(),
        })
    }

    /// The exact body the admin gate answers with: `{"error":"Unauthorized"}`.
    pub fn unauthorized() -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, "Unauthorized")
    }

    pub fn bad_request(message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, message)
    }

    pub fn conflict(message: &str) -> HttpResponse {
        Self::error(StatusCode::CONFLICT, message)
    }

    pub fn unprocessable(message: &str) -> HttpResponse {
        Self::error(StatusCode::UNPROCESSABLE_ENTITY, message)
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "An unexpected error occurred",
        )
    }
}
