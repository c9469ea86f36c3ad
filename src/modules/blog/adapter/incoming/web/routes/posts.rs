use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::auth::adapter::incoming::web::SESSION_COOKIE;
use crate::blog::application::domain::entities::NewPost;
use crate::blog::application::use_cases::create_post::CreatePostError;
use crate::blog::application::use_cases::list_posts::ListPostsError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, post, web, HttpRequest, Responder};
use tracing::error;

/// List articles, newest first. Anonymous callers see published posts;
/// a valid admin session widens the listing to include drafts.
#[utoipa::path(
    get,
    path = "/api/blog",
    tag = "Blog",
    responses(
        (status = 200, description = "Articles, newest first"),
        (status = 500, description = "Internal server error")
    )
)]
#[get("/api/blog")]
pub async fn list_posts_handler(req: HttpRequest, data: web::Data<AppState>) -> impl Responder {
    let include_drafts = match req.cookie(SESSION_COOKIE) {
        Some(cookie) => matches!(
            data.session_gate.execute(cookie.value()).await,
            Ok(Some(_))
        ),
        None => false,
    };

    match data.list_posts_use_case.execute(include_drafts).await {
        Ok(posts) => ApiResponse::ok(posts),
        Err(ListPostsError::RepositoryError(msg)) => {
            error!(error = %msg, "blog listing failed");
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/blog")]
pub async fn create_post_handler(
    _admin: AdminUser,
    body: web::Json<NewPost>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.create_post_use_case.execute(body.into_inner()).await {
        Ok(post) => ApiResponse::created(post),
        Err(CreatePostError::Validation(msg)) => ApiResponse::bad_request(&msg),
        Err(CreatePostError::DuplicateSlug) => {
            ApiResponse::conflict("A post with this slug already exists")
        }
        Err(CreatePostError::RepositoryError(msg)) => {
            error!(error = %msg, "blog create failed");
            ApiResponse::internal_error()
        }
    }
}
