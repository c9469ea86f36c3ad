use crate::resume::application::domain::entities::{ProfileDraft, ResumeProfile};
use crate::resume::application::ports::outgoing::{ProfileRepository, ResumeRepositoryError};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum UpdateProfileError {
    #[error("{0}")]
    Validation(String),
    #[error("repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IUpdateProfileUseCase: Send + Sync {
    async fn execute(&self, draft: ProfileDraft) -> Result<ResumeProfile, UpdateProfileError>;
}

pub struct UpdateProfileUseCase<R: ProfileRepository> {
    repository: R,
}

impl<R: ProfileRepository> UpdateProfileUseCase<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn validate(draft: &ProfileDraft) -> Result<(), UpdateProfileError> {
    for (field, value) in [
        ("name", &draft.name),
        ("title", &draft.title),
        ("email", &draft.email),
    ] {
        if value.trim().is_empty() {
            return Err(UpdateProfileError::Validation(format!(
                "{} must not be empty",
                field
            )));
        }
    }
    Ok(())
}

#[async_trait]
impl<R: ProfileRepository> IUpdateProfileUseCase for UpdateProfileUseCase<R> {
    async fn execute(&self, draft: ProfileDraft) -> Result<ResumeProfile, UpdateProfileError> {
        validate(&draft)?;
        self.repository
            .upsert(draft)
            .await
            .map_err(|ResumeRepositoryError::DatabaseError(msg)| {
                UpdateProfileError::RepositoryError(msg)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    #[derive(Default, Clone)]
    struct MockProfileRepository {
        upserted: Arc<Mutex<Vec<ProfileDraft>>>,
    }

    #[async_trait]
    impl ProfileRepository for MockProfileRepository {
        async fn find(&self) -> Result<Option<ResumeProfile>, ResumeRepositoryError> {
            Ok(None)
        }

        async fn upsert(
            &self,
            draft: ProfileDraft,
        ) -> Result<ResumeProfile, ResumeRepositoryError> {
            self.upserted.lock().unwrap().push(draft.clone());
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

    fn draft() -> ProfileDraft {
        ProfileDraft {
            name: "Ada Lovelace".to_string(),
            title: "Software Engineer".to_string(),
            email: "ada@example.com".to_string(),
            phone: String::new(),
            location: "London".to_string(),
            website: String::new(),
            github: "ada".to_string(),
            linkedin: "ada".to_string(),
            summary: "Builds engines.".to_string(),
        }
    }

    #[tokio::test]
    async fn test_valid_draft_is_upserted() {
        let repo = MockProfileRepository::default();
        let use_case = UpdateProfileUseCase::new(repo.clone());

        let profile = use_case.execute(draft()).await.unwrap();

        assert_eq!(profile.name, "Ada Lovelace");
        assert_eq!(repo.upserted.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_name_is_rejected_before_the_repository() {
        let repo = MockProfileRepository::default();
        let use_case = UpdateProfileUseCase::new(repo.clone());

        let result = use_case
            .execute(ProfileDraft {
                name: "   ".to_string(),
                ..draft()
            })
            .await;

        assert!(matches!(result, Err(UpdateProfileError::Validation(_))));
        assert!(repo.upserted.lock().unwrap().is_empty());
    }
}
