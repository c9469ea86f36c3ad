use super::ResumeRepositoryError;
use crate::resume::application::domain::entities::{ProfileDraft, ResumeProfile};
use async_trait::async_trait;

/// Singleton access to the resume profile: `find` reads the first row,
/// `upsert` updates it in place or inserts the first one.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find(&self) -> Result<Option<ResumeProfile>, ResumeRepositoryError>;
    async fn upsert(&self, draft: ProfileDraft) -> Result<ResumeProfile, ResumeRepositoryError>;
}
