use crate::resume::application::domain::entities::{EducationEntry, EducationEntryDraft};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "education_entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    #[sea_orm(column_type = "Text", string_len = 150)]
    pub school: String,
    #[sea_orm(column_type = "Text", string_len = 150)]
    pub degree: String,
    #[sea_orm(column_type = "Text", string_len = 150)]
    pub field: String,
    #[sea_orm(column_type = "Text", string_len = 50)]
    pub start: String,
    #[sea_orm(column_type = "Text", string_len = 50)]
    pub end: String,
    #[sea_orm(column_type = "Text", string_len = 20, nullable)]
    pub gpa: Option<String>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub bullets: Option<JsonValue>,
    pub order: i32,
}

impl Model {
    /// Stored null bullets come back as an empty list.
    pub fn to_domain(&self) -> EducationEntry {
        EducationEntry {
            id: self.id,
            school: self.school.clone(),
            degree: self.degree.clone(),
            field: self.field.clone(),
            start: self.start.clone(),
            end: self.end.clone(),
            gpa: self.gpa.clone(),
            bullets: self
                .bullets
                .as_ref()
                .and_then(|value| serde_json::from_value(value.clone()).ok())
                .unwrap_or_default(),
            order: self.order,
        }
    }

    pub fn from_draft(draft: &EducationEntryDraft, position: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            school: draft.school.clone(),
            degree: draft.degree.clone(),
            field: draft.field.clone(),
            start: draft.start.clone(),
            end: draft.end.clone(),
            gpa: draft.gpa.clone().filter(|gpa| !gpa.is_empty()),
            bullets: if draft.bullets.is_empty() {
                None
            } else {
                serde_json::to_value(&draft.bullets).ok()
            },
            order: position,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
