use crate::resume::application::domain::entities::{WorkExperience, WorkExperienceDraft};
use crate::resume::application::ports::outgoing::{ExperienceRepository, ResumeRepositoryError};
use crate::shared::persistence::replace_collection;
use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;

use super::sea_orm_entity::work_experiences::{
    ActiveModel as ExperienceActiveModel, Column as ExperienceColumn, Entity as ExperienceEntity,
    Model as ExperienceModel,
};

#[derive(Debug, Clone)]
pub struct ExperienceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExperienceRepository for ExperienceRepositoryPostgres {
    async fn find_all(&self) -> Result<Vec<WorkExperience>, ResumeRepositoryError> {
        let models = ExperienceEntity::find()
            .order_by_asc(ExperienceColumn::Order)
            .all(&*self.db)
            .await
            .map_err(|err| ResumeRepositoryError::DatabaseError(err.to_string()))?;

        Ok(models.iter().map(ExperienceModel::to_domain).collect())
    }

    async fn replace_all(
        &self,
        experiences: Vec<WorkExperienceDraft>,
    ) -> Result<(), ResumeRepositoryError> {
        let rows: Vec<ExperienceActiveModel> = experiences
            .iter()
            .enumerate()
            .map(|(position, draft)| ExperienceModel::from_draft(draft, position as i32).into())
            .collect();

        replace_collection(&self.db, rows)
            .await
            .map_err(|err| ResumeRepositoryError::DatabaseError(err.to_string()))
    }
}
