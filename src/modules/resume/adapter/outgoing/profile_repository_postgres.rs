use crate::resume::application::domain::entities::{ProfileDraft, ResumeProfile};
use crate::resume::application::ports::outgoing::{ProfileRepository, ResumeRepositoryError};
use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;

use super::sea_orm_entity::resume_profiles::{
    ActiveModel as ProfileActiveModel, Entity as ProfileEntity, Model as ProfileModel,
};

#[derive(Debug, Clone)]
pub struct ProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn find(&self) -> Result<Option<ResumeProfile>, ResumeRepositoryError> {
        let model = ProfileEntity::find()
            .one(&*self.db)
            .await
            .map_err(|err| ResumeRepositoryError::DatabaseError(err.to_string()))?;

        Ok(model.map(|m| m.to_domain()))
    }

    async fn upsert(&self, draft: ProfileDraft) -> Result<ResumeProfile, ResumeRepositoryError> {
        let existing = ProfileEntity::find()
            .one(&*self.db)
            .await
            .map_err(|err| ResumeRepositoryError::DatabaseError(err.to_string()))?;

        let model = match existing {
            Some(current) => {
                let mut active: ProfileActiveModel = current.into();
                active.name = Set(draft.name);
                active.title = Set(draft.title);
                active.email = Set(draft.email);
                active.phone = Set(draft.phone);
                active.location = Set(draft.location);
                active.website = Set(draft.website);
                active.github = Set(draft.github);
                active.linkedin = Set(draft.linkedin);
                active.summary = Set(draft.summary);
                active.updated_at = Set(chrono::Utc::now().into());

                active
                    .update(&*self.db)
                    .await
                    .map_err(|err| ResumeRepositoryError::DatabaseError(err.to_string()))?
            }
            None => {
                let active: ProfileActiveModel = ProfileModel::from_draft(&draft).into();

                ProfileEntity::insert(active)
                    .exec_with_returning(&*self.db)
                    .await
                    .map_err(|err| ResumeRepositoryError::DatabaseError(err.to_string()))?
            }
        };

        Ok(model.to_domain())
    }
}
