use crate::resume::application::domain::entities::{WorkExperience, WorkExperienceDraft};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "work_experiences")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    #[sea_orm(column_type = "Text", string_len = 150)]
    pub company: String,
    #[sea_orm(column_type = "Text", string_len = 150)]
    pub title: String,
    #[sea_orm(column_type = "Text", string_len = 150)]
    pub location: String,
    #[sea_orm(column_type = "Text", string_len = 50)]
    pub start: String,
    #[sea_orm(column_type = "Text", string_len = 50)]
    pub end: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub bullets: JsonValue,
    pub order: i32,
}

impl Model {
    pub fn to_domain(&self) -> WorkExperience {
        WorkExperience {
            id: self.id,
            company: self.company.clone(),
            title: self.title.clone(),
            location: self.location.clone(),
            start: self.start.clone(),
            end: self.end.clone(),
            bullets: serde_json::from_value(self.bullets.clone()).unwrap_or_default(),
            order: self.order,
        }
    }

    pub fn from_draft(draft: &WorkExperienceDraft, position: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            company: draft.company.clone(),
            title: draft.title.clone(),
            location: draft.location.clone(),
            start: draft.start.clone(),
            end: draft.end.clone(),
            bullets: serde_json::to_value(&draft.bullets).unwrap_or_default(),
            order: position,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
