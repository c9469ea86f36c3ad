use super::ResumeRepositoryError;
use crate::resume::application::domain::entities::{WorkExperience, WorkExperienceDraft};
use async_trait::async_trait;

#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<WorkExperience>, ResumeRepositoryError>;
    async fn replace_all(
        &self,
        experiences: Vec<WorkExperienceDraft>,
    ) -> Result<(), ResumeRepositoryError>;
}
