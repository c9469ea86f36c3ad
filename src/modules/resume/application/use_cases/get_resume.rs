use crate::resume::application::domain::entities::ResumeView;
use crate::resume::application::ports::outgoing::{
    EducationRepository, ExperienceRepository, ProfileRepository, ResumeRepositoryError,
    SkillRepository,
};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum GetResumeError {
    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IGetResumeUseCase: Send + Sync {
    async fn execute(&self) -> Result<ResumeView, GetResumeError>;
}

/// Aggregates the four resume collections concurrently for the public
/// resume page.
pub struct GetResumeUseCase<P, S, E, D>
where
    P: ProfileRepository,
    S: SkillRepository,
    E: ExperienceRepository,
    D: EducationRepository,
{
    profiles: P,
    skills: S,
    experiences: E,
    educations: D,
}

impl<P, S, E, D> GetResumeUseCase<P, S, E, D>
where
    P: ProfileRepository,
    S: SkillRepository,
    E: ExperienceRepository,
    D: EducationRepository,
{
    pub fn new(profiles: P, skills: S, experiences: E, educations: D) -> Self {
        Self {
            profiles,
            skills,
            experiences,
            educations,
        }
    }
}

#[async_trait]
impl<P, S, E, D> IGetResumeUseCase for GetResumeUseCase<P, S, E, D>
where
    P: ProfileRepository,
    S: SkillRepository,
    E: ExperienceRepository,
    D: EducationRepository,
{
    async fn execute(&self) -> Result<ResumeView, GetResumeError> {
        let (profile, skills, experience, education) = futures::try_join!(
            self.profiles.find(),
            self.skills.find_all(),
            self.experiences.find_all(),
            self.educations.find_all(),
        )
        .map_err(|ResumeRepositoryError::DatabaseError(msg)| {
            GetResumeError::RepositoryError(msg)
        })?;

        Ok(ResumeView {
            profile,
            skills,
            experience,
            education,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::application::domain::entities::{
        EducationEntry, EducationEntryDraft, ProfileDraft, ResumeProfile, SkillGroup,
        SkillGroupDraft, WorkExperience, WorkExperienceDraft,
    };
    use uuid::Uuid;

    struct EmptyProfiles;
    #[async_trait]
    impl ProfileRepository for EmptyProfiles {
        async fn find(&self) -> Result<Option<ResumeProfile>, ResumeRepositoryError> {
            Ok(None)
        }
        async fn upsert(
            &self,
            _draft: ProfileDraft,
        ) -> Result<ResumeProfile, ResumeRepositoryError> {
            unimplemented!()
        }
    }

    struct OneSkill;
    #[async_trait]
    impl SkillRepository for OneSkill {
        async fn find_all(&self) -> Result<Vec<SkillGroup>, ResumeRepositoryError> {
            Ok(vec![SkillGroup {
                id: Uuid::new_v4(),
                category: "Languages".to_string(),
                items: vec!["Rust".to_string()],
                order: 0,
            }])
        }
        async fn replace_all(
            &self,
            _groups: Vec<SkillGroupDraft>,
        ) -> Result<(), ResumeRepositoryError> {
            unimplemented!()
        }
    }

    struct NoExperience;
    #[async_trait]
    impl ExperienceRepository for NoExperience {
        async fn find_all(&self) -> Result<Vec<WorkExperience>, ResumeRepositoryError> {
            Ok(vec![])
        }
        async fn replace_all(
            &self,
            _experiences: Vec<WorkExperienceDraft>,
        ) -> Result<(), ResumeRepositoryError> {
            unimplemented!()
        }
    }

    struct FailingEducation;
    #[async_trait]
    impl EducationRepository for FailingEducation {
        async fn find_all(&self) -> Result<Vec<EducationEntry>, ResumeRepositoryError> {
            Err(ResumeRepositoryError::DatabaseError(
                "timeout".to_string(),
            ))
        }
        async fn replace_all(
            &self,
            _entries: Vec<EducationEntryDraft>,
        ) -> Result<(), ResumeRepositoryError> {
            unimplemented!()
        }
    }

    struct NoEducation;
    #[async_trait]
    impl EducationRepository for NoEducation {
        async fn find_all(&self) -> Result<Vec<EducationEntry>, ResumeRepositoryError> {
            Ok(vec![])
        }
        async fn replace_all(
            &self,
            _entries: Vec<EducationEntryDraft>,
        ) -> Result<(), ResumeRepositoryError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn test_missing_profile_yields_null_not_error() {
        let use_case = GetResumeUseCase::new(EmptyProfiles, OneSkill, NoExperience, NoEducation);

        let view = use_case.execute().await.unwrap();

        assert!(view.profile.is_none());
        assert_eq!(view.skills.len(), 1);
        assert!(view.experience.is_empty());
    }

    #[tokio::test]
    async fn test_any_repository_failure_fails_the_aggregate() {
        let use_case =
            GetResumeUseCase::new(EmptyProfiles, OneSkill, NoExperience, FailingEducation);

        assert!(matches!(
            use_case.execute().await,
            Err(GetResumeError::RepositoryError(_))
        ));
    }
}
