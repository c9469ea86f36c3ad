use crate::banner::application::domain::entities::NewBanner;
use crate::banner::application::use_cases::create_banner::CreateBannerError;
use crate::banner::application::use_cases::list_all_banners::ListAllBannersError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, post, web, Responder};
use tracing::error;

#[get("/api/admin/banners")]
pub async fn list_banners_handler(data: web::Data<AppState>) -> impl Responder {
    match data.list_all_banners_use_case.execute().await {
        Ok(banners) => ApiResponse::ok(banners),
        Err(ListAllBannersError::RepositoryError(msg)) => {
            error!(error = %msg, "banner admin listing failed");
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/admin/banners")]
pub async fn create_banner_handler(
    body: web::Json<NewBanner>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.create_banner_use_case.execute(body.into_inner()).await {
        Ok(banner) => ApiResponse::created(banner),
        Err(CreateBannerError::Validation(msg)) => ApiResponse::bad_request(&msg),
        Err(CreateBannerError::RepositoryError(msg)) => {
            error!(error = %msg, "banner create failed");
            ApiResponse::internal_error()
        }
    }
}
