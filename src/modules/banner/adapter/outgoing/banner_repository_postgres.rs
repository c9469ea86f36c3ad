use crate::banner::application::domain::entities::{Banner, BannerPatch, NewBanner};
use crate::banner::application::ports::outgoing::{BannerRepository, BannerRepositoryError};
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::banners::{
    ActiveModel as BannerActiveModel, Column as BannerColumn, Entity as BannerEntity,
    Model as BannerModel,
};

#[derive(Debug, Clone)]
pub struct BannerRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BannerRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(err: sea_orm::DbErr) -> BannerRepositoryError {
    BannerRepositoryError::DatabaseError(err.to_string())
}

#[async_trait]
impl BannerRepository for BannerRepositoryPostgres {
    async fn find_active(&self) -> Result<Vec<Banner>, BannerRepositoryError> {
        let models = BannerEntity::find()
            .filter(BannerColumn::Active.eq(true))
            .order_by_asc(BannerColumn::Order)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.iter().map(BannerModel::to_domain).collect())
    }

    async fn find_all(&self) -> Result<Vec<Banner>, BannerRepositoryError> {
        let models = BannerEntity::find()
            .order_by_asc(BannerColumn::Order)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.iter().map(BannerModel::to_domain).collect())
    }

    async fn insert(&self, banner: NewBanner) -> Result<Banner, BannerRepositoryError> {
        let active: BannerActiveModel = BannerModel::from_new(&banner).into();

        let inserted = BannerEntity::insert(active)
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(inserted.to_domain())
    }

    async fn patch(&self, id: Uuid, patch: BannerPatch) -> Result<Banner, BannerRepositoryError> {
        let existing = BannerEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(BannerRepositoryError::NotFound)?;

        let mut active: BannerActiveModel = existing.into();
        if let Some(message) = patch.message {
            active.message = Set(message);
        }
        if let Some(link) = patch.link {
            active.link = Set(link);
        }
        if let Some(link_text) = patch.link_text {
            active.link_text = Set(link_text);
        }
        if let Some(variant) = patch.variant {
            active.variant = Set(variant.as_str().to_string());
        }
        if let Some(page_path) = patch.page_path {
            active.page_path = Set(page_path);
        }
        if let Some(is_active) = patch.active {
            active.active = Set(is_active);
        }
        if let Some(order) = patch.order {
            active.order = Set(order);
        }

        let saved = active.update(&*self.db).await.map_err(map_db_err)?;

        Ok(saved.to_domain())
    }

    async fn delete(&self, id: Uuid) -> Result<(), BannerRepositoryError> {
        let result = BannerEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(BannerRepositoryError::NotFound);
        }

        Ok(())
    }
}
