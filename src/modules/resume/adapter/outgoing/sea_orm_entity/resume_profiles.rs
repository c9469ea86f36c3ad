use crate::resume::application::domain::entities::{ProfileDraft, ResumeProfile};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "resume_profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    #[sea_orm(column_type = "Text", string_len = 150)]
    pub name: String,
    #[sea_orm(column_type = "Text", string_len = 150)]
    pub title: String,
    #[sea_orm(column_type = "Text", string_len = 254)]
    pub email: String,
    #[sea_orm(column_type = "Text", string_len = 50)]
    pub phone: String,
    #[sea_orm(column_type = "Text", string_len = 150)]
    pub location: String,
    #[sea_orm(column_type = "Text")]
    pub website: String,
    #[sea_orm(column_type = "Text", string_len = 100)]
    pub github: String,
    #[sea_orm(column_type = "Text", string_len = 100)]
    pub linkedin: String,
    #[sea_orm(column_type = "Text")]
    pub summary: String,

    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> ResumeProfile {
        ResumeProfile {
            id: self.id,
            name: self.name.clone(),
            title: self.title.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            location: self.location.clone(),
            website: self.website.clone(),
            github: self.github.clone(),
            linkedin: self.linkedin.clone(),
            summary: self.summary.clone(),
            created_at: self.created_at.to_utc(),
            updated_at: self.updated_at.to_utc(),
        }
    }

    pub fn from_draft(draft: &ProfileDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draft.name.clone(),
            title: draft.title.clone(),
            email: draft.email.clone(),
            phone: draft.phone.clone(),
            location: draft.location.clone(),
            website: draft.website.clone(),
            github: draft.github.clone(),
            linkedin: draft.linkedin.clone(),
            summary: draft.summary.clone(),
            created_at: chrono::Utc::now().into(),
            updated_at: chrono::Utc::now().into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
