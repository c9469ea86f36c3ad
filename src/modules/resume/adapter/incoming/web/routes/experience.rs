use crate::resume::application::domain::entities::WorkExperienceDraft;
use crate::resume::application::use_cases::get_experience::GetExperienceError;
use crate::resume::application::use_cases::replace_experience::ReplaceExperienceError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, put, web, Responder};
use tracing::error;

#[get("/api/admin/resume/experience")]
pub async fn get_experience_handler(data: web::Data<AppState>) -> impl Responder {
    match data.get_experience_use_case.execute().await {
        Ok(experiences) => ApiResponse::ok(experiences),
        Err(GetExperienceError::RepositoryError(msg)) => {
            error!(error = %msg, "experience read failed");
            ApiResponse::internal_error()
        }
    }
}

#[put("/api/admin/resume/experience")]
pub async fn replace_experience_handler(
    body: web::Json<Vec<WorkExperienceDraft>>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .replace_experience_use_case
        .execute(body.into_inner())
        .await
    {
        Ok(()) => ApiResponse::success(),
        Err(ReplaceExperienceError::Validation(msg)) => ApiResponse::bad_request(&msg),
        Err(ReplaceExperienceError::RepositoryError(msg)) => {
            error!(error = %msg, "experience replace failed");
            ApiResponse::internal_error()
        }
    }
}
