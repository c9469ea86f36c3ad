use crate::resume::application::domain::entities::{SkillGroup, SkillGroupDraft};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "skills")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    #[sea_orm(column_type = "Text", string_len = 100)]
    pub category: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub items: JsonValue,
    pub order: i32,
}

impl Model {
    pub fn to_domain(&self) -> SkillGroup {
        SkillGroup {
            id: self.id,
            category: self.category.clone(),
            items: serde_json::from_value(self.items.clone()).unwrap_or_default(),
            order: self.order,
        }
    }

    /// Position in the submitted sequence becomes the stored order; the id is
    /// regenerated.
    pub fn from_draft(draft: &SkillGroupDraft, position: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            category: draft.category.clone(),
            items: serde_json::to_value(&draft.items).unwrap_or_default(),
            order: position,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
