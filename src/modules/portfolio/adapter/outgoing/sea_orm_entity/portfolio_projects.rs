use crate::portfolio::application::domain::entities::{PortfolioProject, ProjectDraft};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "portfolio_projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    #[sea_orm(column_type = "Text", string_len = 100)]
    pub slug: String,
    #[sea_orm(column_type = "Text", string_len = 150)]
    pub title: String,
    #[sea_orm(column_type = "Text", string_len = 100)]
    pub subdomain: String,
    #[sea_orm(column_type = "Text")]
    pub tagline: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub tech_stack: JsonValue,
    #[sea_orm(column_type = "JsonBinary")]
    pub features: JsonValue,
    #[sea_orm(column_type = "Text", nullable)]
    pub hero_image: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub github_url: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub live_url: String,
    pub order: i32,
}

impl Model {
    pub fn to_domain(&self) -> PortfolioProject {
        PortfolioProject {
            id: self.id,
            slug: self.slug.clone(),
            title: self.title.clone(),
            subdomain: self.subdomain.clone(),
            tagline: self.tagline.clone(),
            description: self.description.clone(),
            tech_stack: serde_json::from_value(self.tech_stack.clone()).unwrap_or_default(),
            features: serde_json::from_value(self.features.clone()).unwrap_or_default(),
            hero_image: self.hero_image.clone(),
            github_url: self.github_url.clone(),
            live_url: self.live_url.clone(),
            order: self.order,
        }
    }

    pub fn from_draft(draft: &ProjectDraft, position: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            slug: draft.slug.clone(),
            title: draft.title.clone(),
            subdomain: draft.subdomain.clone(),
            tagline: draft.tagline.clone(),
            description: draft.description.clone(),
            tech_stack: serde_json::to_value(&draft.tech_stack).unwrap_or_default(),
            features: serde_json::to_value(&draft.features).unwrap_or_default(),
            hero_image: draft.hero_image.clone().filter(|url| !url.is_empty()),
            github_url: draft.github_url.clone().filter(|url| !url.is_empty()),
            live_url: draft.live_url.clone(),
            order: position,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
