use crate::banner::application::domain::entities::{Banner, BannerVariant, NewBanner};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "banners")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub message: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub link: Option<String>,
    #[sea_orm(column_type = "Text", string_len = 100, nullable)]
    pub link_text: Option<String>,
    #[sea_orm(column_type = "Text", string_len = 20)]
    pub variant: String,
    #[sea_orm(column_type = "Text", string_len = 250, nullable)]
    pub page_path: Option<String>,
    pub active: bool,
    pub order: i32,
}

fn normalize(value: Option<&String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty()).cloned()
}

impl Model {
    pub fn to_domain(&self) -> Banner {
        Banner {
            id: self.id,
            message: self.message.clone(),
            link: self.link.clone(),
            link_text: self.link_text.clone(),
            // Unknown stored values degrade to the default style.
            variant: BannerVariant::parse(&self.variant).unwrap_or_default(),
            page_path: self.page_path.clone(),
            active: self.active,
            order: self.order,
        }
    }

    /// Empty strings in the nullable columns are stored as NULL.
    pub fn from_new(banner: &NewBanner) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: banner.message.clone(),
            link: normalize(banner.link.as_ref()),
            link_text: normalize(banner.link_text.as_ref()),
            variant: banner.variant.as_str().to_string(),
            page_path: normalize(banner.page_path.as_ref()),
            active: banner.active,
            order: banner.order,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
