use crate::portfolio::application::domain::entities::ProjectDraft;
use crate::portfolio::application::use_cases::get_projects::GetProjectsError;
use crate::portfolio::application::use_cases::replace_projects::ReplaceProjectsError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, put, web, Responder};
use tracing::error;

#[get("/api/admin/portfolio")]
pub async fn get_projects_handler(data: web::Data<AppState>) -> impl Responder {
    match data.get_projects_use_case.execute().await {
        Ok(projects) => ApiResponse::ok(projects),
        Err(GetProjectsError::RepositoryError(msg)) => {
            error!(error = %msg, "portfolio read failed");
            ApiResponse::internal_error()
        }
    }
}

#[put("/api/admin/portfolio")]
pub async fn replace_projects_handler(
    body: web::Json<Vec<ProjectDraft>>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .replace_projects_use_case
        .execute(body.into_inner())
        .await
    {
        Ok(()) => ApiResponse::success(),
        Err(ReplaceProjectsError::Validation(msg)) => ApiResponse::bad_request(&msg),
        Err(ReplaceProjectsError::RepositoryError(msg)) => {
            error!(error = %msg, "portfolio replace failed");
            ApiResponse::internal_error()
        }
    }
}
