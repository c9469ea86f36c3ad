use crate::blog::application::domain::entities::{BlogPost, NewPost};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "blog_posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    #[sea_orm(column_type = "Text", string_len = 150)]
    pub slug: String,
    #[sea_orm(column_type = "Text", string_len = 250)]
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub excerpt: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub tags: JsonValue,
    pub published: bool,

    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> BlogPost {
        BlogPost {
            id: self.id,
            slug: self.slug.clone(),
            title: self.title.clone(),
            excerpt: self.excerpt.clone(),
            content: self.content.clone(),
            tags: serde_json::from_value(self.tags.clone()).unwrap_or_default(),
            published: self.published,
            created_at: self.created_at.to_utc(),
            updated_at: self.updated_at.to_utc(),
        }
    }

    pub fn from_new(post: &NewPost) -> Self {
        Self {
            id: Uuid::new_v4(),
            slug: post.slug.clone(),
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            content: post.content.clone(),
            tags: serde_json::to_value(&post.tags).unwrap_or_default(),
            published: post.published,
            created_at: chrono::Utc::now().into(),
            updated_at: chrono::Utc::now().into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tags_round_trip_through_jsonb() {
        let model = Model {
            id: Uuid::new_v4(),
            slug: "hello".to_string(),
            title: "Hello".to_string(),
            excerpt: "First".to_string(),
            content: "# Hello".to_string(),
            tags: json!(["rust", "actix"]),
            published: true,
            created_at: chrono::Utc::now().into(),
            updated_at: chrono::Utc::now().into(),
        };

        let post = model.to_domain();
        assert_eq!(post.tags, vec!["rust".to_string(), "actix".to_string()]);
    }

    #[test]
    fn test_from_new_defaults_shape() {
        let model = Model::from_new(&NewPost {
            slug: "hello".to_string(),
            title: "Hello".to_string(),
            excerpt: "First".to_string(),
            content: "# Hello".to_string(),
            tags: vec![],
            published: false,
        });

        assert_eq!(model.tags, json!([]));
        assert!(!model.published);
    }
}
