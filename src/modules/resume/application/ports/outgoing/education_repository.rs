use super::ResumeRepositoryError;
use crate::resume::application::domain::entities::{EducationEntry, EducationEntryDraft};
use async_trait::async_trait;

#[async_trait]
pub trait EducationRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<EducationEntry>, ResumeRepositoryError>;
    async fn replace_all(
        &self,
        entries: Vec<EducationEntryDraft>,
    ) -> Result<(), ResumeRepositoryError>;
}
