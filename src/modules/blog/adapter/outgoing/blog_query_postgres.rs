// src/modules/blog/adapter/outgoing/blog_query_postgres.rs

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, Order, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use std::collections::HashMap;
use std::sync::Arc;

use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::auth::application::domain::entities::UserId;
use crate::modules::blog::adapter::outgoing::sea_orm_entity::{blogs, comments};
use crate::modules::blog::application::ports::outgoing::{
    BlogQuery, BlogQueryError, BlogSortField, BlogView, CommentSortField, CommentView,
};
use crate::modules::user::adapter::outgoing::profile_query_postgres::model_to_profile;
use crate::modules::user::application::ports::outgoing::AuthorSummary;
use crate::shared::pagination::{ListQuery, PageResult};

// ============================================================================
// Sort columns
// ============================================================================

fn blog_column(field: BlogSortField) -> blogs::Column {
    match field {
        BlogSortField::CreateTime => blogs::Column::CreateTime,
        BlogSortField::LastUpdateTime => blogs::Column::LastUpdateTime,
        BlogSortField::LikeValue => blogs::Column::LikeValue,
        BlogSortField::Title => blogs::Column::Title,
        BlogSortField::Id => blogs::Column::Id,
    }
}

fn comment_column(field: CommentSortField) -> comments::Column {
    match field {
        CommentSortField::CreateTime => comments::Column::CreateTime,
        CommentSortField::LikeValue => comments::Column::LikeValue,
        CommentSortField::Id => comments::Column::Id,
    }
}

fn order(desc: bool) -> Order {
    if desc {
        Order::Desc
    } else {
        Order::Asc
    }
}

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone)]
pub struct BlogQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BlogQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// One round trip for every author on a page.
    async fn load_authors(
        &self,
        author_ids: Vec<i32>,
    ) -> Result<HashMap<i32, AuthorSummary>, BlogQueryError> {
        if author_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let authors = users::Entity::find()
            .filter(users::Column::Id.is_in(author_ids))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(authors
            .into_iter()
            .map(|user| (user.id, model_to_profile(user).into()))
            .collect())
    }
}

#[async_trait]
impl BlogQuery for BlogQueryPostgres {
    async fn find_blog(&self, blog_id: i32) -> Result<Option<BlogView>, BlogQueryError> {
        let Some(blog) = blogs::Entity::find_by_id(blog_id)
            .filter(blogs::Column::IsDelete.eq(false))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let authors = self.load_authors(vec![blog.author_id]).await?;
        blog_to_view(blog, &authors).map(Some)
    }

    async fn find_comment(&self, comment_id: i32) -> Result<Option<CommentView>, BlogQueryError> {
        let Some(comment) = comments::Entity::find_by_id(comment_id)
            .filter(comments::Column::IsDelete.eq(false))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let authors = self.load_authors(vec![comment.author_id]).await?;
        comment_to_view(comment, &authors).map(Some)
    }

    async fn list_blogs(
        &self,
        author: Option<UserId>,
        query: ListQuery<BlogSortField>,
    ) -> Result<PageResult<BlogView>, BlogQueryError> {
        let mut select = blogs::Entity::find().filter(blogs::Column::IsDelete.eq(false));

        if let Some(author) = author {
            select = select.filter(blogs::Column::AuthorId.eq(author.value()));
        }

        let total = select.clone().count(&*self.db).await.map_err(map_db_err)?;

        let models = select
            .order_by(blog_column(query.sort), order(query.desc))
            .order_by_asc(blogs::Column::Id)
            .offset(query.page.offset())
            .limit(query.page.count)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let authors = self
            .load_authors(models.iter().map(|b| b.author_id).collect())
            .await?;

        let items = models
            .into_iter()
            .map(|blog| blog_to_view(blog, &authors))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PageResult::new(items, query.page, total))
    }

    async fn list_comments(
        &self,
        blog_id: i32,
        query: ListQuery<CommentSortField>,
    ) -> Result<PageResult<CommentView>, BlogQueryError> {
        let select = comments::Entity::find()
            .filter(comments::Column::BlogId.eq(blog_id))
            .filter(comments::Column::IsDelete.eq(false));

        let total = select.clone().count(&*self.db).await.map_err(map_db_err)?;

        let models = select
            .order_by(comment_column(query.sort), order(query.desc))
            .order_by_asc(comments::Column::Id)
            .offset(query.page.offset())
            .limit(query.page.count)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let authors = self
            .load_authors(models.iter().map(|c| c.author_id).collect())
            .await?;

        let items = models
            .into_iter()
            .map(|comment| comment_to_view(comment, &authors))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PageResult::new(items, query.page, total))
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn author_of(
    authors: &HashMap<i32, AuthorSummary>,
    author_id: i32,
) -> Result<AuthorSummary, BlogQueryError> {
    authors.get(&author_id).cloned().ok_or_else(|| {
        BlogQueryError::DatabaseError(format!("author {author_id} missing"))
    })
}

fn blog_to_view(
    model: blogs::Model,
    authors: &HashMap<i32, AuthorSummary>,
) -> Result<BlogView, BlogQueryError> {
    Ok(BlogView {
        id: model.id,
        author: author_of(authors, model.author_id)?,
        title: model.title,
        content: model.content,
        like_value: model.like_value,
        create_time: model.create_time.into(),
        last_update_time: model.last_update_time.into(),
    })
}

fn comment_to_view(
    model: comments::Model,
    authors: &HashMap<i32, AuthorSummary>,
) -> Result<CommentView, BlogQueryError> {
    Ok(CommentView {
        id: model.id,
        blog_id: model.blog_id,
        author: author_of(authors, model.author_id)?,
        content: model.content,
        like_value: model.like_value,
        create_time: model.create_time.into(),
    })
}

fn map_db_err(e: DbErr) -> BlogQueryError {
    BlogQueryError::DatabaseError(e.to_string())
}
