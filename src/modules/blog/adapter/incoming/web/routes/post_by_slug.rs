use crate::blog::application::use_cases::get_post_by_slug::GetPostBySlugError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::error;

/// Public article lookup. Drafts 404 like missing slugs.
#[utoipa::path(
    get,
    path = "/api/blog/{slug}",
    tag = "Blog",
    params(("slug" = String, Path, description = "Article slug")),
    responses(
        (status = 200, description = "The published article"),
        (status = 404, description = "No published article under this slug"),
        (status = 500, description = "Internal server error")
    )
)]
#[get("/api/blog/{slug}")]
pub async fn get_post_by_slug_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.get_post_by_slug_use_case.execute(&path).await {
        Ok(Some(post)) => ApiResponse::ok(post),
        Ok(None) => ApiResponse::not_found("Post not found"),
        Err(GetPostBySlugError::RepositoryError(msg)) => {
            error!(error = %msg, "blog lookup failed");
            ApiResponse::internal_error()
        }
    }
}
