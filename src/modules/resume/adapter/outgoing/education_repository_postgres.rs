use crate::resume::application::domain::entities::{EducationEntry, EducationEntryDraft};
use crate::resume::application::ports::outgoing::{EducationRepository, ResumeRepositoryError};
use crate::shared::persistence::replace_collection;
use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;

use super::sea_orm_entity::education_entries::{
    ActiveModel as EducationActiveModel, Column as EducationColumn, Entity as EducationEntity,
    Model as EducationModel,
};

#[derive(Debug, Clone)]
pub struct EducationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EducationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EducationRepository for EducationRepositoryPostgres {
    async fn find_all(&self) -> Result<Vec<EducationEntry>, ResumeRepositoryError> {
        let models = EducationEntity::find()
            .order_by_asc(EducationColumn::Order)
            .all(&*self.db)
            .await
            .map_err(|err| ResumeRepositoryError::DatabaseError(err.to_string()))?;

        Ok(models.iter().map(EducationModel::to_domain).collect())
    }

    async fn replace_all(
        &self,
        entries: Vec<EducationEntryDraft>,
    ) -> Result<(), ResumeRepositoryError> {
        let rows: Vec<EducationActiveModel> = entries
            .iter()
            .enumerate()
            .map(|(position, draft)| EducationModel::from_draft(draft, position as i32).into())
            .collect();

        replace_collection(&self.db, rows)
            .await
            .map_err(|err| ResumeRepositoryError::DatabaseError(err.to_string()))
    }
}
