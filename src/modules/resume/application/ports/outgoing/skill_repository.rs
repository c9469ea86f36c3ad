use super::ResumeRepositoryError;
use crate::resume::application::domain::entities::{SkillGroup, SkillGroupDraft};
use async_trait::async_trait;

#[async_trait]
pub trait SkillRepository: Send + Sync {
    /// All skill groups ordered by `order` ascending.
    async fn find_all(&self) -> Result<Vec<SkillGroup>, ResumeRepositoryError>;

    /// Replaces the whole collection in one transaction; position in the
    /// slice becomes the stored `order`.
    async fn replace_all(&self, groups: Vec<SkillGroupDraft>)
        -> Result<(), ResumeRepositoryError>;
}
