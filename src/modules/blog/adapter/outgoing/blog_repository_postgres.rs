// src/modules/blog/adapter/outgoing/blog_repository_postgres.rs

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::modules::blog::adapter::outgoing::sea_orm_entity::blogs::{self, Column, Entity};
use crate::modules::blog::application::ports::outgoing::{
    BlogRecord, BlogRepository, BlogRepositoryError, CreateBlogData, PatchBlogData,
};

#[derive(Clone)]
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
    async fn create(&self, author: UserId, data: CreateBlogData) -> Result<i32, BlogRepositoryError> {
        let model = blogs::ActiveModel {
            author_id: Set(author.value()),
            title: Set(data.title),
            content: Set(data.content),
            ..Default::default()
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(inserted.id)
    }

    async fn find_record(&self, blog_id: i32) -> Result<Option<BlogRecord>, BlogRepositoryError> {
        let model = Entity::find_by_id(blog_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(|m| BlogRecord {
            id: m.id,
            author_id: UserId::from(m.author_id),
            is_delete: m.is_delete,
        }))
    }

    async fn patch(&self, blog_id: i32, data: PatchBlogData) -> Result<(), BlogRepositoryError> {
        if data.is_empty() {
            return Ok(());
        }

        let mut update = Entity::update_many()
            .filter(Column::Id.eq(blog_id))
            .filter(Column::IsDelete.eq(false));

        if let Some(title) = data.title {
            update = update.col_expr(Column::Title, Expr::value(title));
        }
        if let Some(content) = data.content {
            update = update.col_expr(Column::Content, Expr::value(content));
        }

        // Without the database trigger the stamp has to travel with the update.
        #[cfg(feature = "no_db_triggers")]
        {
            update = update.col_expr(Column::LastUpdateTime, Expr::current_timestamp().into());
        }

        let res = update.exec(&*self.db).await.map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(BlogRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn soft_delete(&self, blog_id: i32) -> Result<(), BlogRepositoryError> {
        let res = Entity::update_many()
            .col_expr(Column::IsDelete, Expr::value(true))
            .filter(Column::Id.eq(blog_id))
            .filter(Column::IsDelete.eq(false)) // state-aware
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(BlogRepositoryError::NotFound);
        }
        Ok(())
    }
}

fn map_db_err(e: DbErr) -> BlogRepositoryError {
    BlogRepositoryError::DatabaseError(e.to_string())
}
