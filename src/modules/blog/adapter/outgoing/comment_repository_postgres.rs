// src/modules/blog/adapter/outgoing/comment_repository_postgres.rs

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::modules::blog::adapter::outgoing::sea_orm_entity::comments::{self, Column, Entity};
use crate::modules::blog::application::ports::outgoing::{
    CommentRecord, CommentRepository, CommentRepositoryError,
};

#[derive(Clone)]
pub struct CommentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl CommentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CommentRepository for CommentRepositoryPostgres {
    async fn create(
        &self,
        author: UserId,
        blog_id: i32,
        content: String,
    ) -> Result<i32, CommentRepositoryError> {
        let model = comments::ActiveModel {
            author_id: Set(author.value()),
            blog_id: Set(blog_id),
            content: Set(content),
            ..Default::default()
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(inserted.id)
    }

    async fn find_record(
        &self,
        comment_id: i32,
    ) -> Result<Option<CommentRecord>, CommentRepositoryError> {
        let model = Entity::find_by_id(comment_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(|m| CommentRecord {
            id: m.id,
            author_id: UserId::from(m.author_id),
            blog_id: m.blog_id,
            is_delete: m.is_delete,
        }))
    }

    async fn soft_delete(&self, comment_id: i32) -> Result<(), CommentRepositoryError> {
        let res = Entity::update_many()
            .col_expr(Column::IsDelete, Expr::value(true))
            .filter(Column::Id.eq(comment_id))
            .filter(Column::IsDelete.eq(false))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(CommentRepositoryError::NotFound);
        }
        Ok(())
    }
}

fn map_db_err(e: DbErr) -> CommentRepositoryError {
    CommentRepositoryError::DatabaseError(e.to_string())
}
