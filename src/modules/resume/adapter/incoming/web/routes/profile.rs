use crate::resume::application::domain::entities::ProfileDraft;
use crate::resume::application::use_cases::get_profile::GetProfileError;
use crate::resume::application::use_cases::update_profile::UpdateProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, put, web, Responder};
use tracing::error;

/// Singleton profile read; admin-gated by the route middleware.
#[get("/api/admin/resume/profile")]
pub async fn get_profile_handler(data: web::Data<AppState>) -> impl Responder {
    match data.get_profile_use_case.execute().await {
        Ok(profile) => ApiResponse::ok(profile),
        Err(GetProfileError::RepositoryError(msg)) => {
            error!(error = %msg, "profile read failed");
            ApiResponse::internal_error()
        }
    }
}

#[put("/api/admin/resume/profile")]
pub async fn update_profile_handler(
    body: web::Json<ProfileDraft>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.update_profile_use_case.execute(body.into_inner()).await {
        Ok(profile) => ApiResponse::ok(profile),
        Err(UpdateProfileError::Validation(msg)) => ApiResponse::bad_request(&msg),
        Err(UpdateProfileError::RepositoryError(msg)) => {
            error!(error = %msg, "profile upsert failed");
            ApiResponse::internal_error()
        }
    }
}
