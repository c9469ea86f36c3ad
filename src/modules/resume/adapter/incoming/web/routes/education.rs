use crate::resume::application::domain::entities::EducationEntryDraft;
use crate::resume::application::use_cases::get_education::GetEducationError;
use crate::resume::application::use_cases::replace_education::ReplaceEducationError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, put, web, Responder};
use tracing::error;

#[get("/api/admin/resume/education")]
pub async fn get_education_handler(data: web::Data<AppState>) -> impl Responder {
    match data.get_education_use_case.execute().await {
        Ok(entries) => ApiResponse::ok(entries),
        Err(GetEducationError::RepositoryError(msg)) => {
            error!(error = %msg, "education read failed");
            ApiResponse::internal_error()
        }
    }
}

#[put("/api/admin/resume/education")]
pub async fn replace_education_handler(
    body: web::Json<Vec<EducationEntryDraft>>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .replace_education_use_case
        .execute(body.into_inner())
        .await
    {
        Ok(()) => ApiResponse::success(),
        Err(ReplaceEducationError::Validation(msg)) => ApiResponse::bad_request(&msg),
        Err(ReplaceEducationError::RepositoryError(msg)) => {
            error!(error = %msg, "education replace failed");
            ApiResponse::internal_error()
        }
    }
}
