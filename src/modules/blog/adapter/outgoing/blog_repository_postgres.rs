use crate::blog::application::domain::entities::{BlogPost, NewPost, PostUpdate};
use crate::blog::application::ports::outgoing::{BlogRepository, BlogRepositoryError};
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::blog_posts::{
    ActiveModel as PostActiveModel, Column as PostColumn, Entity as PostEntity, Model as PostModel,
};

#[derive(Debug, Clone)]
pub struct BlogRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BlogRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BlogRepository for BlogRepositoryPostgres {
    async fn find_all(&self, published_only: bool) -> Result<Vec<BlogPost>, BlogRepositoryError> {
        let mut query = PostEntity::find().order_by_desc(PostColumn::CreatedAt);
        if published_only {
            query = query.filter(PostColumn::Published.eq(true));
        }

        let models = query.all(&*self.db).await.map_err(map_db_err)?;

        Ok(models.iter().map(PostModel::to_domain).collect())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, BlogRepositoryError> {
        let model = PostEntity::find()
            .filter(PostColumn::Slug.eq(slug))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(|model| model.to_domain()))
    }

    async fn insert(&self, post: NewPost) -> Result<BlogPost, BlogRepositoryError> {
        let active: PostActiveModel = PostModel::from_new(&post).into();

        let inserted = PostEntity::insert(active)
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_slug_error)?;

        Ok(inserted.to_domain())
    }

    async fn update(&self, id: Uuid, update: PostUpdate) -> Result<BlogPost, BlogRepositoryError> {
        let existing = PostEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(BlogRepositoryError::NotFound)?;

        let mut active: PostActiveModel = existing.into();
        active.slug = Set(update.slug);
        active.title = Set(update.title);
        active.excerpt = Set(update.excerpt);
        active.content = Set(update.content);
        if let Some(tags) = update.tags {
            active.tags = Set(serde_json::to_value(&tags).unwrap_or_default());
        }
        if let Some(published) = update.published {
            active.published = Set(published);
        }
        active.updated_at = Set(chrono::Utc::now().into());

        let saved = active.update(&*self.db).await.map_err(map_slug_error)?;

        Ok(saved.to_domain())
    }

    async fn delete(&self, id: Uuid) -> Result<(), BlogRepositoryError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(BlogRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn map_slug_error(err: DbErr) -> BlogRepositoryError {
    let msg = err.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("slug")
    {
        BlogRepositoryError::DuplicateSlug
    } else {
        BlogRepositoryError::DatabaseError(err.to_string())
    }
}

fn map_db_err(err: DbErr) -> BlogRepositoryError {
    BlogRepositoryError::DatabaseError(err.to_string())
}
