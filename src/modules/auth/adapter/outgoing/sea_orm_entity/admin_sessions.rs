use crate::auth::application::domain::entities::{NewSession, SessionRecord};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "admin_sessions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    #[sea_orm(column_type = "Text", string_len = 64)]
    pub token_hash: String,
    #[sea_orm(column_type = "Text", string_len = 100)]
    pub username: String,

    pub created_at: DateTimeWithTimeZone,
    pub expires_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> SessionRecord {
        SessionRecord {
            id: self.id,
            token_hash: self.token_hash.clone(),
            username: self.username.clone(),
            created_at: self.created_at.to_utc(),
            expires_at: self.expires_at.to_utc(),
        }
    }

    pub fn from_new_session(session: &NewSession) -> Self {
        Self {
            id: Uuid::new_v4(),
            token_hash: session.token_hash.clone(),
            username: session.username.clone(),
            created_at: chrono::Utc::now().into(),
            expires_at: session.expires_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
