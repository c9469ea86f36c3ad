use crate::portfolio::application::use_cases::delete_project::DeleteProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, web, Responder};
use tracing::error;
use uuid::Uuid;

#[delete("/api/admin/portfolio/{id}")]
pub async fn delete_project_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .delete_project_use_case
        .execute(path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::success(),
        Err(DeleteProjectError::NotFound) => ApiResponse::not_found("Project not found"),
        Err(DeleteProjectError::RepositoryError(msg)) => {
            error!(error = %msg, "portfolio delete failed");
            ApiResponse::internal_error()
        }
    }
}
