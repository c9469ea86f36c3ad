use crate::banner::application::domain::entities::BannerPatch;
use crate::banner::application::use_cases::delete_banner::DeleteBannerError;
use crate::banner::application::use_cases::patch_banner::PatchBannerError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, patch, web, Responder};
use tracing::error;
use uuid::Uuid;

#[patch("/api/admin/banners/{id}")]
pub async fn patch_banner_handler(
    path: web::Path<Uuid>,
    body: web::Json<BannerPatch>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .patch_banner_use_case
        .execute(path.into_inner(), body.into_inner())
        .await
    {
        Ok(banner) => ApiResponse::ok(banner),
        Err(PatchBannerError::Validation(msg)) => ApiResponse::bad_request(&msg),
        Err(PatchBannerError::NotFound) => ApiResponse::not_found("Banner not found"),
        Err(PatchBannerError::RepositoryError(msg)) => {
            error!(error = %msg, "banner patch failed");
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/admin/banners/{id}")]
pub async fn delete_banner_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.delete_banner_use_case.execute(path.into_inner()).await {
        Ok(()) => ApiResponse::success(),
        Err(DeleteBannerError::NotFound) => ApiResponse::not_found("Banner not found"),
        Err(DeleteBannerError::RepositoryError(msg)) => {
            error!(error = %msg, "banner delete failed");
            ApiResponse::internal_error()
        }
    }
}
