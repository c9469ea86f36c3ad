pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::auth;
pub use modules::banner;
pub use modules::blog;
pub use modules::markdown;
pub use modules::portfolio;
pub use modules::resume;

use crate::auth::adapter::incoming::web::middleware::AdminGate;
use crate::auth::adapter::incoming::web::SessionGate;
use crate::auth::adapter::outgoing::github_oauth::GitHubOAuthProvider;
use crate::auth::adapter::outgoing::session_repository_postgres::SessionRepositoryPostgres;
use crate::auth::application::ports::outgoing::OAuthProvider;
use crate::auth::application::services::allow_list::AllowList;
use crate::auth::application::use_cases::{
    authenticate_session::AuthenticateSessionUseCase,
    sign_in::{ISignInUseCase, SignInUseCase},
    sign_out::{ISignOutUseCase, SignOutUseCase},
};
use crate::banner::adapter::outgoing::banner_repository_postgres::BannerRepositoryPostgres;
use crate::banner::application::use_cases::{
    create_banner::{CreateBannerUseCase, ICreateBannerUseCase},
    delete_banner::{DeleteBannerUseCase, IDeleteBannerUseCase},
    list_all_banners::{IListAllBannersUseCase, ListAllBannersUseCase},
    list_public_banners::{IListPublicBannersUseCase, ListPublicBannersUseCase},
    patch_banner::{IPatchBannerUseCase, PatchBannerUseCase},
};
use crate::blog::adapter::outgoing::blog_repository_postgres::BlogRepositoryPostgres;
use crate::blog::application::use_cases::{
    create_post::{CreatePostUseCase, ICreatePostUseCase},
    delete_post::{DeletePostUseCase, IDeletePostUseCase},
    get_post_by_slug::{GetPostBySlugUseCase, IGetPostBySlugUseCase},
    list_posts::{IListPostsUseCase, ListPostsUseCase},
    update_post::{IUpdatePostUseCase, UpdatePostUseCase},
};
use crate::markdown::adapter::outgoing::comrak_renderer::ComrakRenderer;
use crate::markdown::application::use_cases::preview_markdown::{
    IPreviewMarkdownUseCase, PreviewMarkdownUseCase,
};
use crate::portfolio::adapter::outgoing::portfolio_repository_postgres::PortfolioRepositoryPostgres;
use crate::portfolio::application::use_cases::{
    delete_project::{DeleteProjectUseCase, IDeleteProjectUseCase},
    get_projects::{GetProjectsUseCase, IGetProjectsUseCase},
    replace_projects::{IReplaceProjectsUseCase, ReplaceProjectsUseCase},
};
use crate::resume::adapter::outgoing::education_repository_postgres::EducationRepositoryPostgres;
use crate::resume::adapter::outgoing::experience_repository_postgres::ExperienceRepositoryPostgres;
use crate::resume::adapter::outgoing::profile_repository_postgres::ProfileRepositoryPostgres;
use crate::resume::adapter::outgoing::skill_repository_postgres::SkillRepositoryPostgres;
use crate::resume::application::use_cases::{
    get_education::{GetEducationUseCase, IGetEducationUseCase},
    get_experience::{GetExperienceUseCase, IGetExperienceUseCase},
    get_profile::{GetProfileUseCase, IGetProfileUseCase},
    get_resume::{GetResumeUseCase, IGetResumeUseCase},
    get_skills::{GetSkillsUseCase, IGetSkillsUseCase},
    replace_education::{IReplaceEducationUseCase, ReplaceEducationUseCase},
    replace_experience::{IReplaceExperienceUseCase, ReplaceExperienceUseCase},
    replace_skills::{IReplaceSkillsUseCase, ReplaceSkillsUseCase},
    update_profile::{IUpdateProfileUseCase, UpdateProfileUseCase},
};

use actix_web::{web, App, HttpServer};
use chrono::Duration as ChronoDuration;
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub oauth_provider: Arc<dyn OAuthProvider + Send + Sync>,
    pub sign_in_use_case: Arc<dyn ISignInUseCase + Send + Sync>,
    pub sign_out_use_case: Arc<dyn ISignOutUseCase + Send + Sync>,
    pub session_gate: SessionGate,
    /// Session and state cookies are marked Secure when the public base URL
    /// is https.
    pub cookie_secure: bool,
    pub get_profile_use_case: Arc<dyn IGetProfileUseCase + Send + Sync>,
    pub update_profile_use_case: Arc<dyn IUpdateProfileUseCase + Send + Sync>,
    pub get_skills_use_case: Arc<dyn IGetSkillsUseCase + Send + Sync>,
    pub replace_skills_use_case: Arc<dyn IReplaceSkillsUseCase + Send + Sync>,
    pub get_experience_use_case: Arc<dyn IGetExperienceUseCase + Send + Sync>,
    pub replace_experience_use_case: Arc<dyn IReplaceExperienceUseCase + Send + Sync>,
    pub get_education_use_case: Arc<dyn IGetEducationUseCase + Send + Sync>,
    pub replace_education_use_case: Arc<dyn IReplaceEducationUseCase + Send + Sync>,
    pub get_resume_use_case: Arc<dyn IGetResumeUseCase + Send + Sync>,
    pub get_projects_use_case: Arc<dyn IGetProjectsUseCase + Send + Sync>,
    pub replace_projects_use_case: Arc<dyn IReplaceProjectsUseCase + Send + Sync>,
    pub delete_project_use_case: Arc<dyn IDeleteProjectUseCase + Send + Sync>,
    pub list_posts_use_case: Arc<dyn IListPostsUseCase + Send + Sync>,
    pub get_post_by_slug_use_case: Arc<dyn IGetPostBySlugUseCase + Send + Sync>,
    pub create_post_use_case: Arc<dyn ICreatePostUseCase + Send + Sync>,
    pub update_post_use_case: Arc<dyn IUpdatePostUseCase + Send + Sync>,
    pub delete_post_use_case: Arc<dyn IDeletePostUseCase + Send + Sync>,
    pub list_public_banners_use_case: Arc<dyn IListPublicBannersUseCase + Send + Sync>,
    pub list_all_banners_use_case: Arc<dyn IListAllBannersUseCase + Send + Sync>,
    pub create_banner_use_case: Arc<dyn ICreateBannerUseCase + Send + Sync>,
    pub patch_banner_use_case: Arc<dyn IPatchBannerUseCase + Send + Sync>,
    pub delete_banner_use_case: Arc<dyn IDeleteBannerUseCase + Send + Sync>,
    pub preview_markdown_use_case: Arc<dyn IPreviewMarkdownUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    config::load_env_files();
    let app_config = config::AppConfig::from_env()
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidInput, err.to_string()))?;

    let server_url = format!("{}:{}", app_config.host, app_config.port);
    info!(%server_url, "starting server");

    let mut opt = ConnectOptions::new(app_config.database.connection_url());
    opt.max_connections(app_config.database.max_connections)
        .min_connections(app_config.database.min_connections)
        .connect_timeout(app_config.database.connect_timeout)
        .acquire_timeout(app_config.database.acquire_timeout)
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::ConnectionRefused, err.to_string()))?;
    let db_arc = Arc::new(conn);

    // Auth wiring
    let oauth_provider = GitHubOAuthProvider::new(
        app_config.oauth.client_id.clone(),
        app_config.oauth.client_secret.clone(),
        app_config.oauth.redirect_url.clone(),
    );
    let session_repo = SessionRepositoryPostgres::new(Arc::clone(&db_arc));
    let allow_list = AllowList::new(app_config.auth.allowed_logins.clone());
    let sign_in_use_case = SignInUseCase::new(
        oauth_provider.clone(),
        session_repo.clone(),
        allow_list,
        ChronoDuration::hours(app_config.auth.session_ttl_hours),
    );
    let sign_out_use_case = SignOutUseCase::new(session_repo.clone());
    let session_gate: SessionGate = Arc::new(AuthenticateSessionUseCase::new(session_repo));
    let cookie_secure = app_config.oauth.redirect_url.starts_with("https://");

    // Resume wiring
    let profile_repo = ProfileRepositoryPostgres::new(Arc::clone(&db_arc));
    let skill_repo = SkillRepositoryPostgres::new(Arc::clone(&db_arc));
    let experience_repo = ExperienceRepositoryPostgres::new(Arc::clone(&db_arc));
    let education_repo = EducationRepositoryPostgres::new(Arc::clone(&db_arc));
    let get_resume_use_case = GetResumeUseCase::new(
        profile_repo.clone(),
        skill_repo.clone(),
        experience_repo.clone(),
        education_repo.clone(),
    );

    // Portfolio, blog, banner, markdown wiring
    let portfolio_repo = PortfolioRepositoryPostgres::new(Arc::clone(&db_arc));
    let blog_repo = BlogRepositoryPostgres::new(Arc::clone(&db_arc));
    let banner_repo = BannerRepositoryPostgres::new(Arc::clone(&db_arc));

    let state = AppState {
        oauth_provider: Arc::new(oauth_provider),
        sign_in_use_case: Arc::new(sign_in_use_case),
        sign_out_use_case: Arc::new(sign_out_use_case),
        session_gate: session_gate.clone(),
        cookie_secure,
        get_profile_use_case: Arc::new(GetProfileUseCase::new(profile_repo.clone())),
        update_profile_use_case: Arc::new(UpdateProfileUseCase::new(profile_repo)),
        get_skills_use_case: Arc::new(GetSkillsUseCase::new(skill_repo.clone())),
        replace_skills_use_case: Arc::new(ReplaceSkillsUseCase::new(skill_repo)),
        get_experience_use_case: Arc::new(GetExperienceUseCase::new(experience_repo.clone())),
        replace_experience_use_case: Arc::new(ReplaceExperienceUseCase::new(experience_repo)),
        get_education_use_case: Arc::new(GetEducationUseCase::new(education_repo.clone())),
        replace_education_use_case: Arc::new(ReplaceEducationUseCase::new(education_repo)),
        get_resume_use_case: Arc::new(get_resume_use_case),
        get_projects_use_case: Arc::new(GetProjectsUseCase::new(portfolio_repo.clone())),
        replace_projects_use_case: Arc::new(ReplaceProjectsUseCase::new(portfolio_repo.clone())),
        delete_project_use_case: Arc::new(DeleteProjectUseCase::new(portfolio_repo)),
        list_posts_use_case: Arc::new(ListPostsUseCase::new(blog_repo.clone())),
        get_post_by_slug_use_case: Arc::new(GetPostBySlugUseCase::new(blog_repo.clone())),
        create_post_use_case: Arc::new(CreatePostUseCase::new(blog_repo.clone())),
        update_post_use_case: Arc::new(UpdatePostUseCase::new(blog_repo.clone())),
        delete_post_use_case: Arc::new(DeletePostUseCase::new(blog_repo)),
        list_public_banners_use_case: Arc::new(ListPublicBannersUseCase::new(banner_repo.clone())),
        list_all_banners_use_case: Arc::new(ListAllBannersUseCase::new(banner_repo.clone())),
        create_banner_use_case: Arc::new(CreateBannerUseCase::new(banner_repo.clone())),
        patch_banner_use_case: Arc::new(PatchBannerUseCase::new(banner_repo.clone())),
        delete_banner_use_case: Arc::new(DeleteBannerUseCase::new(banner_repo)),
        preview_markdown_use_case: Arc::new(PreviewMarkdownUseCase::new(ComrakRenderer::new())),
    };

    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .wrap(AdminGate::new(session_gate.clone()))
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(session_gate.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(shared::api::json_config::custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login::oauth_login_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::callback::oauth_callback_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout::logout_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::session::session_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::pages::login_page_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::pages::dashboard_page_handler);
    // Resume
    cfg.service(crate::resume::adapter::incoming::web::routes::profile::get_profile_handler);
    cfg.service(crate::resume::adapter::incoming::web::routes::profile::update_profile_handler);
    cfg.service(crate::resume::adapter::incoming::web::routes::skills::get_skills_handler);
    cfg.service(crate::resume::adapter::incoming::web::routes::skills::replace_skills_handler);
    cfg.service(crate::resume::adapter::incoming::web::routes::experience::get_experience_handler);
    cfg.service(
        crate::resume::adapter::incoming::web::routes::experience::replace_experience_handler,
    );
    cfg.service(crate::resume::adapter::incoming::web::routes::education::get_education_handler);
    cfg.service(
        crate::resume::adapter::incoming::web::routes::education::replace_education_handler,
    );
    cfg.service(crate::resume::adapter::incoming::web::routes::resume::get_resume_handler);
    // Portfolio
    cfg.service(crate::portfolio::adapter::incoming::web::routes::projects::get_projects_handler);
    cfg.service(
        crate::portfolio::adapter::incoming::web::routes::projects::replace_projects_handler,
    );
    cfg.service(
        crate::portfolio::adapter::incoming::web::routes::delete_project::delete_project_handler,
    );
    // Blog
    cfg.service(crate::blog::adapter::incoming::web::routes::posts::list_posts_handler);
    cfg.service(crate::blog::adapter::incoming::web::routes::posts::create_post_handler);
    cfg.service(crate::blog::adapter::incoming::web::routes::post_by_slug::get_post_by_slug_handler);
    cfg.service(crate::blog::adapter::incoming::web::routes::manage_post::update_post_handler);
    cfg.service(crate::blog::adapter::incoming::web::routes::manage_post::delete_post_handler);
    // Banners
    cfg.service(
        crate::banner::adapter::incoming::web::routes::public_banners::public_banners_handler,
    );
    cfg.service(crate::banner::adapter::incoming::web::routes::admin_banners::list_banners_handler);
    cfg.service(
        crate::banner::adapter::incoming::web::routes::admin_banners::create_banner_handler,
    );
    cfg.service(crate::banner::adapter::incoming::web::routes::manage_banner::patch_banner_handler);
    cfg.service(
        crate::banner::adapter::incoming::web::routes::manage_banner::delete_banner_handler,
    );
    // Markdown preview
    cfg.service(crate::markdown::adapter::incoming::web::routes::preview::preview_markdown_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
