//! Neutral stand-ins for every port and use case the handlers reach for.
//! Route tests swap in purpose-built mocks for the one collaborator under
//! test and leave the rest of the state on these.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::{AdminSession, IssuedSession, OAuthIdentity};
use crate::auth::application::ports::outgoing::{OAuthProvider, OAuthProviderError};
use crate::auth::application::use_cases::authenticate_session::{
    AuthenticateSessionError, IAuthenticateSessionUseCase,
};
use crate::auth::application::use_cases::sign_in::{ISignInUseCase, SignInError};
use crate::auth::application::use_cases::sign_out::{ISignOutUseCase, SignOutError};
use crate::banner::application::domain::entities::{Banner, BannerPatch, NewBanner};
use crate::banner::application::use_cases::create_banner::{CreateBannerError, ICreateBannerUseCase};
use crate::banner::application::use_cases::delete_banner::{DeleteBannerError, IDeleteBannerUseCase};
use crate::banner::application::use_cases::list_all_banners::{
    IListAllBannersUseCase, ListAllBannersError,
};
use crate::banner::application::use_cases::list_public_banners::{
    IListPublicBannersUseCase, ListPublicBannersError,
};
use crate::banner::application::use_cases::patch_banner::{IPatchBannerUseCase, PatchBannerError};
use crate::blog::application::domain::entities::{BlogPost, NewPost, PostUpdate};
use crate::blog::application::use_cases::create_post::{CreatePostError, ICreatePostUseCase};
use crate::blog::application::use_cases::delete_post::{DeletePostError, IDeletePostUseCase};
use crate::blog::application::use_cases::get_post_by_slug::{
    GetPostBySlugError, IGetPostBySlugUseCase,
};
use crate::blog::application::use_cases::list_posts::{IListPostsUseCase, ListPostsError};
use crate::blog::application::use_cases::update_post::{IUpdatePostUseCase, UpdatePostError};
use crate::markdown::application::use_cases::preview_markdown::{
    IPreviewMarkdownUseCase, PreviewMarkdownError,
};
use crate::portfolio::application::domain::entities::{PortfolioProject, ProjectDraft};
use crate::portfolio::application::use_cases::delete_project::{
    DeleteProjectError, IDeleteProjectUseCase,
};
use crate::portfolio::application::use_cases::get_projects::{GetProjectsError, IGetProjectsUseCase};
use crate::portfolio::application::use_cases::replace_projects::{
    IReplaceProjectsUseCase, ReplaceProjectsError,
};
use crate::resume::application::domain::entities::{
    EducationEntry, EducationEntryDraft, ProfileDraft, ResumeProfile, ResumeView, SkillGroup,
    SkillGroupDraft, WorkExperience, WorkExperienceDraft,
};
use crate::resume::application::use_cases::get_education::{GetEducationError, IGetEducationUseCase};
use crate::resume::application::use_cases::get_experience::{
    GetExperienceError, IGetExperienceUseCase,
};
use crate::resume::application::use_cases::get_profile::{GetProfileError, IGetProfileUseCase};
use crate::resume::application::use_cases::get_resume::{GetResumeError, IGetResumeUseCase};
use crate::resume::application::use_cases::get_skills::{GetSkillsError, IGetSkillsUseCase};
use crate::resume::application::use_cases::replace_education::{
    IReplaceEducationUseCase, ReplaceEducationError,
};
use crate::resume::application::use_cases::replace_experience::{
    IReplaceExperienceUseCase, ReplaceExperienceError,
};
use crate::resume::application::use_cases::replace_skills::{
    IReplaceSkillsUseCase, ReplaceSkillsError,
};
use crate::resume::application::use_cases::update_profile::{
    IUpdateProfileUseCase, UpdateProfileError,
};

/// Provider stub with one allow-listed login. `authorize_url` points at a
/// fake host and embeds the state so redirect tests can assert on it.
pub struct StubOAuthProvider {
    login: String,
}

impl StubOAuthProvider {
    pub fn allowing(login: &str) -> Self {
        Self {
            login: login.to_string(),
        }
    }
}

#[async_trait]
impl OAuthProvider for StubOAuthProvider {
    fn authorize_url(&self, state: &str) -> String {
        format!("https://provider.test/authorize?client_id=stub&state={state}")
    }

    async fn exchange_code(&self, _code: &str) -> Result<OAuthIdentity, OAuthProviderError> {
        Ok(OAuthIdentity {
            username: self.login.clone(),
        })
    }
}

/// Session gate stub accepting exactly one token.
pub struct StubSessionGate {
    valid_token: String,
    username: String,
}

impl StubSessionGate {
    pub fn accepting(valid_token: &str, username: &str) -> Self {
        Self {
            valid_token: valid_token.to_string(),
            username: username.to_string(),
        }
    }
}

#[async_trait]
impl IAuthenticateSessionUseCase for StubSessionGate {
    async fn execute(&self, token: &str) -> Result<Option<AdminSession>, AuthenticateSessionError> {
        if token == self.valid_token {
            Ok(Some(AdminSession {
                username: self.username.clone(),
                expires_at: Utc::now() + Duration::hours(1),
            }))
        } else {
            Ok(None)
        }
    }
}

/// Gate that rejects every token; the builder default.
pub struct StubDenyAllGate;

#[async_trait]
impl IAuthenticateSessionUseCase for StubDenyAllGate {
    async fn execute(
        &self,
        _token: &str,
    ) -> Result<Option<AdminSession>, AuthenticateSessionError> {
        Ok(None)
    }
}

pub struct StubSignIn;

#[async_trait]
impl ISignInUseCase for StubSignIn {
    async fn execute(&self, _code: &str) -> Result<IssuedSession, SignInError> {
        Err(SignInError::IdentityRejected)
    }
}

pub struct StubSignOut;

#[async_trait]
impl ISignOutUseCase for StubSignOut {
    async fn execute(&self, _token: &str) -> Result<(), SignOutError> {
        Ok(())
    }
}

pub struct StubGetProfile;

#[async_trait]
impl IGetProfileUseCase for StubGetProfile {
    async fn execute(&self) -> Result<Option<ResumeProfile>, GetProfileError> {
        Ok(None)
    }
}

pub struct StubUpdateProfile;

#[async_trait]
impl IUpdateProfileUseCase for StubUpdateProfile {
    async fn execute(&self, draft: ProfileDraft) -> Result<ResumeProfile, UpdateProfileError> {
        Ok(ResumeProfile {
            id: Uuid::new_v4(),
            name: draft.name,
            title: draft.title,
            email: draft.email,
            phone: draft.phone,
            location: draft.location,
            website: draft.website,
            github: draft.github,
            linkedin: draft.linkedin,
            summary: draft.summary,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        })
    }
}

pub struct StubGetSkills;

#[async_trait]
impl IGetSkillsUseCase for StubGetSkills {
    async fn execute(&self) -> Result<Vec<SkillGroup>, GetSkillsError> {
        Ok(vec![])
    }
}

pub struct StubReplaceSkills;

#[async_trait]
impl IReplaceSkillsUseCase for StubReplaceSkills {
    async fn execute(&self, _groups: Vec<SkillGroupDraft>) -> Result<(), ReplaceSkillsError> {
        Ok(())
    }
}

pub struct StubGetExperience;

#[async_trait]
impl IGetExperienceUseCase for StubGetExperience {
    async fn execute(&self) -> Result<Vec<WorkExperience>, GetExperienceError> {
        Ok(vec![])
    }
}

pub struct StubReplaceExperience;

#[async_trait]
impl IReplaceExperienceUseCase for StubReplaceExperience {
    async fn execute(
        &self,
        _entries: Vec<WorkExperienceDraft>,
    ) -> Result<(), ReplaceExperienceError> {
        Ok(())
    }
}

pub struct StubGetEducation;

#[async_trait]
impl IGetEducationUseCase for StubGetEducation {
    async fn execute(&self) -> Result<Vec<EducationEntry>, GetEducationError> {
        Ok(vec![])
    }
}

pub struct StubReplaceEducation;

#[async_trait]
impl IReplaceEducationUseCase for StubReplaceEducation {
    async fn execute(
        &self,
        _entries: Vec<EducationEntryDraft>,
    ) -> Result<(), ReplaceEducationError> {
        Ok(())
    }
}

pub struct StubGetResume;

#[async_trait]
impl IGetResumeUseCase for StubGetResume {
    async fn execute(&self) -> Result<ResumeView, GetResumeError> {
        Ok(ResumeView {
            profile: None,
            skills: vec![],
            experience: vec![],
            education: vec![],
        })
    }
}

pub struct StubGetProjects;

#[async_trait]
impl IGetProjectsUseCase for StubGetProjects {
    async fn execute(&self) -> Result<Vec<PortfolioProject>, GetProjectsError> {
        Ok(vec![])
    }
}

pub struct StubReplaceProjects;

#[async_trait]
impl IReplaceProjectsUseCase for StubReplaceProjects {
    async fn execute(&self, _projects: Vec<ProjectDraft>) -> Result<(), ReplaceProjectsError> {
        Ok(())
    }
}

pub struct StubDeleteProject;

#[async_trait]
impl IDeleteProjectUseCase for StubDeleteProject {
    async fn execute(&self, _id: Uuid) -> Result<(), DeleteProjectError> {
        Err(DeleteProjectError::NotFound)
    }
}

pub struct StubListPosts;

#[async_trait]
impl IListPostsUseCase for StubListPosts {
    async fn execute(&self, _include_drafts: bool) -> Result<Vec<BlogPost>, ListPostsError> {
        Ok(vec![])
    }
}

pub struct StubGetPostBySlug;

#[async_trait]
impl IGetPostBySlugUseCase for StubGetPostBySlug {
    async fn execute(&self, _slug: &str) -> Result<Option<BlogPost>, GetPostBySlugError> {
        Ok(None)
    }
}

pub struct StubCreatePost;

#[async_trait]
impl ICreatePostUseCase for StubCreatePost {
    async fn execute(&self, post: NewPost) -> Result<BlogPost, CreatePostError> {
        Ok(BlogPost {
            id: Uuid::new_v4(),
            slug: post.slug,
            title: post.title,
            excerpt: post.excerpt,
            content: post.content,
            tags: post.tags,
            published: post.published,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        })
    }
}

pub struct StubUpdatePost;

#[async_trait]
impl IUpdatePostUseCase for StubUpdatePost {
    async fn execute(&self, _id: Uuid, _update: PostUpdate) -> Result<BlogPost, UpdatePostError> {
        Err(UpdatePostError::NotFound)
    }
}

pub struct StubDeletePost;

#[async_trait]
impl IDeletePostUseCase for StubDeletePost {
    async fn execute(&self, _id: Uuid) -> Result<(), DeletePostError> {
        Err(DeletePostError::NotFound)
    }
}

pub struct StubListPublicBanners;

#[async_trait]
impl IListPublicBannersUseCase for StubListPublicBanners {
    async fn execute(&self) -> Result<Vec<Banner>, ListPublicBannersError> {
        Ok(vec![])
    }
}

pub struct StubListAllBanners;

#[async_trait]
impl IListAllBannersUseCase for StubListAllBanners {
    async fn execute(&self) -> Result<Vec<Banner>, ListAllBannersError> {
        Ok(vec![])
    }
}

pub struct StubCreateBanner;

#[async_trait]
impl ICreateBannerUseCase for StubCreateBanner {
    async fn execute(&self, banner: NewBanner) -> Result<Banner, CreateBannerError> {
        Ok(Banner {
            id: Uuid::new_v4(),
            message: banner.message,
            link: banner.link,
            link_text: banner.link_text,
            variant: banner.variant,
            page_path: banner.page_path,
            active: banner.active,
            order: banner.order,
        })
    }
}

pub struct StubPatchBanner;

#[async_trait]
impl IPatchBannerUseCase for StubPatchBanner {
    async fn execute(&self, _id: Uuid, _patch: BannerPatch) -> Result<Banner, PatchBannerError> {
        Err(PatchBannerError::NotFound)
    }
}

pub struct StubDeleteBanner;

#[async_trait]
impl IDeleteBannerUseCase for StubDeleteBanner {
    async fn execute(&self, _id: Uuid) -> Result<(), DeleteBannerError> {
        Err(DeleteBannerError::NotFound)
    }
}

pub struct StubPreviewMarkdown;

#[async_trait]
impl IPreviewMarkdownUseCase for StubPreviewMarkdown {
    async fn execute(&self, content: &str) -> Result<String, PreviewMarkdownError> {
        Ok(format!("<p>{content}</p>"))
    }
}
