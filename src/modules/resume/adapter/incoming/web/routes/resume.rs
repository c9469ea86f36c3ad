use crate::resume::application::use_cases::get_resume::GetResumeError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;

/// Public resume aggregate
///
/// One response carrying the profile plus the three ordered collections,
/// fetched concurrently.
#[utoipa::path(
    get,
    path = "/api/resume",
    tag = "resume",
    responses(
        (status = 200, description = "Profile, skills, experience and education"),
    )
)]
#[get("/api/resume")]
pub async fn get_resume_handler(data: web::Data<AppState>) -> impl Responder {
    match data.get_resume_use_case.execute().await {
        Ok(view) => ApiResponse::ok(view),
        Err(GetResumeError::RepositoryError(msg)) => {
            error!(error = %msg, "resume aggregate read failed");
            ApiResponse::internal_error()
        }
    }
}
