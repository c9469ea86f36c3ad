use crate::banner::application::domain::entities::Banner;
use crate::banner::application::use_cases::list_public_banners::ListPublicBannersError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

#[derive(Debug, Deserialize)]
pub struct BannerQuery {
    path: Option<String>,
}

/// Page scoping is an exact string match; a banner without a `page_path`
/// is global and shows everywhere.
fn scoped_to(banners: Vec<Banner>, path: Option<&str>) -> Vec<Banner> {
    let Some(path) = path else {
        return banners;
    };
    banners
        .into_iter()
        .filter(|banner| match &banner.page_path {
            None => true,
            Some(page_path) => page_path == path,
        })
        .collect()
}

#[utoipa::path(
    get,
    path = "/api/banners",
    tag = "Banners",
    params(("path" = Option<String>, Query, description = "Limit to banners scoped to this page")),
    responses(
        (status = 200, description = "Active banners, ordered"),
        (status = 500, description = "Internal server error")
    )
)]
#[get("/api/banners")]
pub async fn public_banners_handler(
    query: web::Query<BannerQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.list_public_banners_use_case.execute().await {
        Ok(banners) => ApiResponse::ok(scoped_to(banners, query.path.as_deref())),
        Err(ListPublicBannersError::RepositoryError(msg)) => {
            error!(error = %msg, "banner listing failed");
            ApiResponse::internal_error()
        }
    }
}
