use crate::auth::adapter::incoming::web::SessionGate;
use crate::auth::application::ports::outgoing::OAuthProvider;
use crate::auth::application::use_cases::sign_in::ISignInUseCase;
use crate::auth::application::use_cases::sign_out::ISignOutUseCase;
use crate::banner::application::use_cases::create_banner::ICreateBannerUseCase;
use crate::banner::application::use_cases::delete_banner::IDeleteBannerUseCase;
use crate::banner::application::use_cases::list_all_banners::IListAllBannersUseCase;
use crate::banner::application::use_cases::list_public_banners::IListPublicBannersUseCase;
use crate::banner::application::use_cases::patch_banner::IPatchBannerUseCase;
use crate::blog::application::use_cases::create_post::ICreatePostUseCase;
use crate::blog::application::use_cases::delete_post::IDeletePostUseCase;
use crate::blog::application::use_cases::get_post_by_slug::IGetPostBySlugUseCase;
use crate::blog::application::use_cases::list_posts::IListPostsUseCase;
use crate::blog::application::use_cases::update_post::IUpdatePostUseCase;
use crate::markdown::application::use_cases::preview_markdown::IPreviewMarkdownUseCase;
use crate::portfolio::application::use_cases::delete_project::IDeleteProjectUseCase;
use crate::portfolio::application::use_cases::get_projects::IGetProjectsUseCase;
use crate::portfolio::application::use_cases::replace_projects::IReplaceProjectsUseCase;
use crate::resume::application::use_cases::get_education::IGetEducationUseCase;
use crate::resume::application::use_cases::get_experience::IGetExperienceUseCase;
use crate::resume::application::use_cases::get_profile::IGetProfileUseCase;
use crate::resume::application::use_cases::get_resume::IGetResumeUseCase;
use crate::resume::application::use_cases::get_skills::IGetSkillsUseCase;
use crate::resume::application::use_cases::replace_education::IReplaceEducationUseCase;
use crate::resume::application::use_cases::replace_experience::IReplaceExperienceUseCase;
use crate::resume::application::use_cases::replace_skills::IReplaceSkillsUseCase;
use crate::resume::application::use_cases::update_profile::IUpdateProfileUseCase;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

/// Builds an [`AppState`] where every collaborator defaults to a neutral
/// stub; tests override only what they exercise.
pub struct TestAppStateBuilder {
    oauth_provider: Arc<dyn OAuthProvider + Send + Sync>,
    sign_in_use_case: Arc<dyn ISignInUseCase + Send + Sync>,
    sign_out_use_case: Arc<dyn ISignOutUseCase + Send + Sync>,
    session_gate: SessionGate,
    cookie_secure: bool,
    get_profile_use_case: Arc<dyn IGetProfileUseCase + Send + Sync>,
    update_profile_use_case: Arc<dyn IUpdateProfileUseCase + Send + Sync>,
    get_skills_use_case: Arc<dyn IGetSkillsUseCase + Send + Sync>,
    replace_skills_use_case: Arc<dyn IReplaceSkillsUseCase + Send + Sync>,
    get_experience_use_case: Arc<dyn IGetExperienceUseCase + Send + Sync>,
    replace_experience_use_case: Arc<dyn IReplaceExperienceUseCase + Send + Sync>,
    get_education_use_case: Arc<dyn IGetEducationUseCase + Send + Sync>,
    replace_education_use_case: Arc<dyn IReplaceEducationUseCase + Send + Sync>,
    get_resume_use_case: Arc<dyn IGetResumeUseCase + Send + Sync>,
    get_projects_use_case: Arc<dyn IGetProjectsUseCase + Send + Sync>,
    replace_projects_use_case: Arc<dyn IReplaceProjectsUseCase + Send + Sync>,
    delete_project_use_case: Arc<dyn IDeleteProjectUseCase + Send + Sync>,
    list_posts_use_case: Arc<dyn IListPostsUseCase + Send + Sync>,
    get_post_by_slug_use_case: Arc<dyn IGetPostBySlugUseCase + Send + Sync>,
    create_post_use_case: Arc<dyn ICreatePostUseCase + Send + Sync>,
    update_post_use_case: Arc<dyn IUpdatePostUseCase + Send + Sync>,
    delete_post_use_case: Arc<dyn IDeletePostUseCase + Send + Sync>,
    list_public_banners_use_case: Arc<dyn IListPublicBannersUseCase + Send + Sync>,
    list_all_banners_use_case: Arc<dyn IListAllBannersUseCase + Send + Sync>,
    create_banner_use_case: Arc<dyn ICreateBannerUseCase + Send + Sync>,
    patch_banner_use_case: Arc<dyn IPatchBannerUseCase + Send + Sync>,
    delete_banner_use_case: Arc<dyn IDeleteBannerUseCase + Send + Sync>,
    preview_markdown_use_case: Arc<dyn IPreviewMarkdownUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            oauth_provider: Arc::new(StubOAuthProvider::allowing("octocat")),
            sign_in_use_case: Arc::new(StubSignIn),
            sign_out_use_case: Arc::new(StubSignOut),
            session_gate: Arc::new(StubDenyAllGate),
            cookie_secure: false,
            get_profile_use_case: Arc::new(StubGetProfile),
            update_profile_use_case: Arc::new(StubUpdateProfile),
            get_skills_use_case: Arc::new(StubGetSkills),
            replace_skills_use_case: Arc::new(StubReplaceSkills),
            get_experience_use_case: Arc::new(StubGetExperience),
            replace_experience_use_case: Arc::new(StubReplaceExperience),
            get_education_use_case: Arc::new(StubGetEducation),
            replace_education_use_case: Arc::new(StubReplaceEducation),
            get_resume_use_case: Arc::new(StubGetResume),
            get_projects_use_case: Arc::new(StubGetProjects),
            replace_projects_use_case: Arc::new(StubReplaceProjects),
            delete_project_use_case: Arc::new(StubDeleteProject),
            list_posts_use_case: Arc::new(StubListPosts),
            get_post_by_slug_use_case: Arc::new(StubGetPostBySlug),
            create_post_use_case: Arc::new(StubCreatePost),
            update_post_use_case: Arc::new(StubUpdatePost),
            delete_post_use_case: Arc::new(StubDeletePost),
            list_public_banners_use_case: Arc::new(StubListPublicBanners),
            list_all_banners_use_case: Arc::new(StubListAllBanners),
            create_banner_use_case: Arc::new(StubCreateBanner),
            patch_banner_use_case: Arc::new(StubPatchBanner),
            delete_banner_use_case: Arc::new(StubDeleteBanner),
            preview_markdown_use_case: Arc::new(StubPreviewMarkdown),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_oauth_provider(mut self, value: Arc<dyn OAuthProvider + Send + Sync>) -> Self {
        self.oauth_provider = value;
        self
    }

    pub fn with_sign_in(mut self, value: Arc<dyn ISignInUseCase + Send + Sync>) -> Self {
        self.sign_in_use_case = value;
        self
    }

    pub fn with_sign_out(mut self, value: Arc<dyn ISignOutUseCase + Send + Sync>) -> Self {
        self.sign_out_use_case = value;
        self
    }

    pub fn with_session_gate(mut self, value: SessionGate) -> Self {
        self.session_gate = value;
        self
    }

    pub fn with_cookie_secure(mut self, value: bool) -> Self {
        self.cookie_secure = value;
        self
    }

    pub fn with_get_profile(mut self, value: Arc<dyn IGetProfileUseCase + Send + Sync>) -> Self {
        self.get_profile_use_case = value;
        self
    }

    pub fn with_update_profile(
        mut self,
        value: Arc<dyn IUpdateProfileUseCase + Send + Sync>,
    ) -> Self {
        self.update_profile_use_case = value;
        self
    }

    pub fn with_get_skills(mut self, value: Arc<dyn IGetSkillsUseCase + Send + Sync>) -> Self {
        self.get_skills_use_case = value;
        self
    }

    pub fn with_replace_skills(
        mut self,
        value: Arc<dyn IReplaceSkillsUseCase + Send + Sync>,
    ) -> Self {
        self.replace_skills_use_case = value;
        self
    }

    pub fn with_get_experience(
        mut self,
        value: Arc<dyn IGetExperienceUseCase + Send + Sync>,
    ) -> Self {
        self.get_experience_use_case = value;
        self
    }

    pub fn with_replace_experience(
        mut self,
        value: Arc<dyn IReplaceExperienceUseCase + Send + Sync>,
    ) -> Self {
        self.replace_experience_use_case = value;
        self
    }

    pub fn with_get_education(
        mut self,
        value: Arc<dyn IGetEducationUseCase + Send + Sync>,
    ) -> Self {
        self.get_education_use_case = value;
        self
    }

    pub fn with_replace_education(
        mut self,
        value: Arc<dyn IReplaceEducationUseCase + Send + Sync>,
    ) -> Self {
        self.replace_education_use_case = value;
        self
    }

    pub fn with_get_resume(mut self, value: Arc<dyn IGetResumeUseCase + Send + Sync>) -> Self {
        self.get_resume_use_case = value;
        self
    }

    pub fn with_get_projects(mut self, value: Arc<dyn IGetProjectsUseCase + Send + Sync>) -> Self {
        self.get_projects_use_case = value;
        self
    }

    pub fn with_replace_projects(
        mut self,
        value: Arc<dyn IReplaceProjectsUseCase + Send + Sync>,
    ) -> Self {
        self.replace_projects_use_case = value;
        self
    }

    pub fn with_delete_project(
        mut self,
        value: Arc<dyn IDeleteProjectUseCase + Send + Sync>,
    ) -> Self {
        self.delete_project_use_case = value;
        self
    }

    pub fn with_list_posts(mut self, value: Arc<dyn IListPostsUseCase + Send + Sync>) -> Self {
        self.list_posts_use_case = value;
        self
    }

    pub fn with_get_post_by_slug(
        mut self,
        value: Arc<dyn IGetPostBySlugUseCase + Send + Sync>,
    ) -> Self {
        self.get_post_by_slug_use_case = value;
        self
    }

    pub fn with_create_post(mut self, value: Arc<dyn ICreatePostUseCase + Send + Sync>) -> Self {
        self.create_post_use_case = value;
        self
    }

    pub fn with_update_post(mut self, value: Arc<dyn IUpdatePostUseCase + Send + Sync>) -> Self {
        self.update_post_use_case = value;
        self
    }

    pub fn with_delete_post(mut self, value: Arc<dyn IDeletePostUseCase + Send + Sync>) -> Self {
        self.delete_post_use_case = value;
        self
    }

    pub fn with_list_public_banners(
        mut self,
        value: Arc<dyn IListPublicBannersUseCase + Send + Sync>,
    ) -> Self {
        self.list_public_banners_use_case = value;
        self
    }

    pub fn with_list_all_banners(
        mut self,
        value: Arc<dyn IListAllBannersUseCase + Send + Sync>,
    ) -> Self {
        self.list_all_banners_use_case = value;
        self
    }

    pub fn with_create_banner(
        mut self,
        value: Arc<dyn ICreateBannerUseCase + Send + Sync>,
    ) -> Self {
        self.create_banner_use_case = value;
        self
    }

    pub fn with_patch_banner(mut self, value: Arc<dyn IPatchBannerUseCase + Send + Sync>) -> Self {
        self.patch_banner_use_case = value;
        self
    }

    pub fn with_delete_banner(
        mut self,
        value: Arc<dyn IDeleteBannerUseCase + Send + Sync>,
    ) -> Self {
        self.delete_banner_use_case = value;
        self
    }

    pub fn with_preview_markdown(
        mut self,
        value: Arc<dyn IPreviewMarkdownUseCase + Send + Sync>,
    ) -> Self {
        self.preview_markdown_use_case = value;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            oauth_provider: self.oauth_provider,
            sign_in_use_case: self.sign_in_use_case,
            sign_out_use_case: self.sign_out_use_case,
            session_gate: self.session_gate,
            cookie_secure: self.cookie_secure,
            get_profile_use_case: self.get_profile_use_case,
            update_profile_use_case: self.update_profile_use_case,
            get_skills_use_case: self.get_skills_use_case,
            replace_skills_use_case: self.replace_skills_use_case,
            get_experience_use_case: self.get_experience_use_case,
            replace_experience_use_case: self.replace_experience_use_case,
            get_education_use_case: self.get_education_use_case,
            replace_education_use_case: self.replace_education_use_case,
            get_resume_use_case: self.get_resume_use_case,
            get_projects_use_case: self.get_projects_use_case,
            replace_projects_use_case: self.replace_projects_use_case,
            delete_project_use_case: self.delete_project_use_case,
            list_posts_use_case: self.list_posts_use_case,
            get_post_by_slug_use_case: self.get_post_by_slug_use_case,
            create_post_use_case: self.create_post_use_case,
            update_post_use_case: self.update_post_use_case,
            delete_post_use_case: self.delete_post_use_case,
            list_public_banners_use_case: self.list_public_banners_use_case,
            list_all_banners_use_case: self.list_all_banners_use_case,
            create_banner_use_case: self.create_banner_use_case,
            patch_banner_use_case: self.patch_banner_use_case,
            delete_banner_use_case: self.delete_banner_use_case,
            preview_markdown_use_case: self.preview_markdown_use_case,
        })
    }
}
