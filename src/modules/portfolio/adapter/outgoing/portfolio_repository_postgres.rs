use crate::portfolio::application::domain::entities::{PortfolioProject, ProjectDraft};
use crate::portfolio::application::ports::outgoing::{
    PortfolioRepository, PortfolioRepositoryError,
};
use crate::shared::persistence::replace_collection;
use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::portfolio_projects::{
    ActiveModel as ProjectActiveModel, Column as ProjectColumn, Entity as ProjectEntity,
    Model as ProjectModel,
};

#[derive(Debug, Clone)]
pub struct PortfolioRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PortfolioRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PortfolioRepository for PortfolioRepositoryPostgres {
    async fn find_all(&self) -> Result<Vec<PortfolioProject>, PortfolioRepositoryError> {
        let models = ProjectEntity::find()
            .order_by_asc(ProjectColumn::Order)
            .all(&*self.db)
            .await
            .map_err(|err| PortfolioRepositoryError::DatabaseError(err.to_string()))?;

        Ok(models.iter().map(ProjectModel::to_domain).collect())
    }

    async fn replace_all(
        &self,
        projects: Vec<ProjectDraft>,
    ) -> Result<(), PortfolioRepositoryError> {
        let rows: Vec<ProjectActiveModel> = projects
            .iter()
            .enumerate()
            .map(|(position, draft)| ProjectModel::from_draft(draft, position as i32).into())
            .collect();

        replace_collection(&self.db, rows)
            .await
            .map_err(|err| PortfolioRepositoryError::DatabaseError(err.to_string()))
    }

    async fn delete(&self, id: Uuid) -> Result<(), PortfolioRepositoryError> {
        let result = ProjectEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(|err| PortfolioRepositoryError::DatabaseError(err.to_string()))?;

        if result.rows_affected == 0 {
            return Err(PortfolioRepositoryError::NotFound);
        }
        Ok(())
    }
}
