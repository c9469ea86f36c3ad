use utoipa::OpenApi;

/// The documented slice of the API: the auth flow plus the public read
/// endpoints. Admin CRUD surfaces are intentionally left out of the
/// published document.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio CMS API",
        version = "1.0.0",
        description = "Backend for the portfolio, resume and blog site"
    ),
    paths(
        crate::auth::adapter::incoming::web::routes::login::oauth_login_handler,
        crate::auth::adapter::incoming::web::routes::callback::oauth_callback_handler,
        crate::auth::adapter::incoming::web::routes::logout::logout_handler,
        crate::auth::adapter::incoming::web::routes::session::session_handler,
        crate::resume::adapter::incoming::web::routes::resume::get_resume_handler,
        crate::blog::adapter::incoming::web::routes::posts::list_posts_handler,
        crate::blog::adapter::incoming::web::routes::post_by_slug::get_post_by_slug_handler,
        crate::banner::adapter::incoming::web::routes::public_banners::public_banners_handler,
    ),
    tags(
        (name = "Auth", description = "GitHub OAuth sign-in and session management"),
        (name = "Resume", description = "Public resume document"),
        (name = "Blog", description = "Public blog articles"),
        (name = "Banners", description = "Site announcement banners")
    )
)]
pub struct ApiDoc;
