use crate::resume::application::domain::entities::{SkillGroup, SkillGroupDraft};
use crate::resume::application::ports::outgoing::{ResumeRepositoryError, SkillRepository};
use crate::shared::persistence::replace_collection;
use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;

use super::sea_orm_entity::skills::{
    ActiveModel as SkillActiveModel, Column as SkillColumn, Entity as SkillEntity,
    Model as SkillModel,
};

#[derive(Debug, Clone)]
pub struct SkillRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SkillRepository for SkillRepositoryPostgres {
    async fn find_all(&self) -> Result<Vec<SkillGroup>, ResumeRepositoryError> {
        let models = SkillEntity::find()
            .order_by_asc(SkillColumn::Order)
            .all(&*self.db)
            .await
            .map_err(|err| ResumeRepositoryError::DatabaseError(err.to_string()))?;

        Ok(models.iter().map(SkillModel::to_domain).collect())
    }

    async fn replace_all(
        &self,
        groups: Vec<SkillGroupDraft>,
    ) -> Result<(), ResumeRepositoryError> {
        let rows: Vec<SkillActiveModel> = groups
            .iter()
            .enumerate()
            .map(|(position, group)| SkillModel::from_draft(group, position as i32).into())
            .collect();

        replace_collection(&self.db, rows)
            .await
            .map_err(|err| ResumeRepositoryError::DatabaseError(err.to_string()))
    }
}
