use crate::auth::application::domain::entities::{NewSession, SessionRecord};
use crate::auth::application::ports::outgoing::{SessionRepository, SessionRepositoryError};
use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;

use super::sea_orm_entity::admin_sessions::{
    ActiveModel as SessionActiveModel, Column as SessionColumn, Entity as SessionEntity,
    Model as SessionModel,
};

#[derive(Debug, Clone)]
pub struct SessionRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SessionRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SessionRepository for SessionRepositoryPostgres {
    async fn insert(&self, session: NewSession) -> Result<(), SessionRepositoryError> {
        let active: SessionActiveModel = SessionModel::from_new_session(&session).into();

        SessionEntity::insert(active)
            .exec_without_returning(&*self.db)
            .await
            .map_err(|err| SessionRepositoryError::DatabaseError(err.to_string()))?;

        Ok(())
    }

    async fn find_by_token_hash(
        &self,
        token_hash: &str,
    ) -> Result<Option<SessionRecord>, SessionRepositoryError> {
        let model = SessionEntity::find()
            .filter(SessionColumn::TokenHash.eq(token_hash))
            .one(&*self.db)
            .await
            .map_err(|err| SessionRepositoryError::DatabaseError(err.to_string()))?;

        Ok(model.map(|m| m.to_domain()))
    }

    async fn delete_by_token_hash(&self, token_hash: &str) -> Result<(), SessionRepositoryError> {
        SessionEntity::delete_many()
            .filter(SessionColumn::TokenHash.eq(token_hash))
            .exec(&*self.db)
            .await
            .map_err(|err| SessionRepositoryError::DatabaseError(err.to_string()))?;

        Ok(())
    }
}
