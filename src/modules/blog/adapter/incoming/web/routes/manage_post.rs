use crate::auth::adapter::incoming::web::extractors::AdminUser;
use crate::blog::application::domain::entities::PostUpdate;
use crate::blog::application::use_cases::delete_post::DeletePostError;
use crate::blog::application::use_cases::update_post::UpdatePostError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, put, web, Responder};
use tracing::error;
use uuid::Uuid;

#[put("/api/blog/{id}")]
pub async fn update_post_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    body: web::Json<PostUpdate>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .update_post_use_case
        .execute(path.into_inner(), body.into_inner())
        .await
    {
        Ok(post) => ApiResponse::ok(post),
        Err(UpdatePostError::Validation(msg)) => ApiResponse::bad_request(&msg),
        Err(UpdatePostError::NotFound) => ApiResponse::not_found("Post not found"),
        Err(UpdatePostError::DuplicateSlug) => {
            ApiResponse::conflict("A post with this slug already exists")
        }
        Err(UpdatePostError::RepositoryError(msg)) => {
            error!(error = %msg, "blog update failed");
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/blog/{id}")]
pub async fn delete_post_handler(
    _admin: AdminUser,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.delete_post_use_case.execute(path.into_inner()).await {
        Ok(()) => ApiResponse::success(),
        Err(DeletePostError::NotFound) => ApiResponse::not_found("Post not found"),
        Err(DeletePostError::RepositoryError(msg)) => {
            error!(error = %msg, "blog delete failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::incoming::web::{SessionGate, SESSION_COOKIE};
    use crate::blog::application::domain::entities::BlogPost;
    use crate::blog::application::use_cases::delete_post::IDeletePostUseCase;
    use crate::blog::application::use_cases::update_post::IUpdatePostUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubSessionGate;
    use actix_web::cookie::Cookie;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::Arc;

    struct MockUpdatePost {
        found: bool,
    }

    #[async_trait]
    impl IUpdatePostUseCase for MockUpdatePost {
        async fn execute(&self, id: Uuid, update: PostUpdate) -> Result<BlogPost, UpdatePostError> {
            if !self.found {
                return Err(UpdatePostError::NotFound);
            }
            Ok(BlogPost {
                id,
                slug: update.slug,
                title: update.title,
                excerpt: update.excerpt,
                content: update.content,
                tags: update.tags.unwrap_or_default(),
                published: update.published.unwrap_or(false),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            })
        }
    }

    struct MockDeletePost {
        found: bool,
    }

    #[async_trait]
    impl IDeletePostUseCase for MockDeletePost {
        async fn execute(&self, _id: Uuid) -> Result<(), DeletePostError> {
            if self.found {
                Ok(())
            } else {
                Err(DeletePostError::NotFound)
            }
        }
    }

    fn gate() -> SessionGate {
        Arc::new(StubSessionGate::accepting("valid-token", "octocat"))
    }

    #[actix_web::test]
    async fn test_update_returns_stored_record() {
        let app_state = TestAppStateBuilder::default()
            .with_update_post(Arc::new(MockUpdatePost { found: true }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(gate()))
                .service(update_post_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/blog/{}", Uuid::new_v4()))
            .cookie(Cookie::new(SESSION_COOKIE, "valid-token"))
            .set_json(serde_json::json!({
                "slug": "renamed",
                "title": "Renamed",
                "excerpt": "Updated",
                "content": "# Renamed",
                "published": true
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["slug"], "renamed");
        assert_eq!(body["published"], true);
    }

    #[actix_web::test]
    async fn test_update_unknown_id_is_404() {
        let app_state = TestAppStateBuilder::default()
            .with_update_post(Arc::new(MockUpdatePost { found: false }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(gate()))
                .service(update_post_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/blog/{}", Uuid::new_v4()))
            .cookie(Cookie::new(SESSION_COOKIE, "valid-token"))
            .set_json(serde_json::json!({
                "slug": "renamed",
                "title": "Renamed",
                "excerpt": "Updated",
                "content": "# Renamed"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 404);
    }

    #[actix_web::test]
    async fn test_delete_returns_success_body() {
        let app_state = TestAppStateBuilder::default()
            .with_delete_post(Arc::new(MockDeletePost { found: true }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(gate()))
                .service(delete_post_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/blog/{}", Uuid::new_v4()))
            .cookie(Cookie::new(SESSION_COOKIE, "valid-token"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body = test::read_body(resp).await;
        assert_eq!(body, r#"{"success":true}"#.as_bytes());
    }

    #[actix_web::test]
    async fn test_delete_without_session_is_unauthorized() {
        let app_state = TestAppStateBuilder::default()
            .with_delete_post(Arc::new(MockDeletePost { found: true }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(web::Data::new(gate()))
                .service(delete_post_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/blog/{}", Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
    }
}
