// src/modules/blog/application/ports/outgoing/blog_query.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::application::domain::entities::UserId;
use crate::modules::user::application::ports::outgoing::AuthorSummary;
use crate::shared::pagination::{ListQuery, PageResult, SortField};

//
// ──────────────────────────────────────────────────────────
// Views
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BlogView {
    pub id: i32,
    pub author: AuthorSummary,
    pub title: String,
    pub content: String,
    pub like_value: i32,
    pub create_time: DateTime<Utc>,
    pub last_update_time: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CommentView {
    pub id: i32,
    pub blog_id: i32,
    pub author: AuthorSummary,
    pub content: String,
    pub like_value: i32,
    pub create_time: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Sort fields
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlogSortField {
    #[default]
    CreateTime,
    LastUpdateTime,
    LikeValue,
    Title,
    Id,
}

impl SortField for BlogSortField {
    const FIELDS: &'static [(&'static str, Self)] = &[
        ("create_time", BlogSortField::CreateTime),
        ("last_update_time", BlogSortField::LastUpdateTime),
        ("like_value", BlogSortField::LikeValue),
        ("title", BlogSortField::Title),
        ("id", BlogSortField::Id),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommentSortField {
    #[default]
    CreateTime,
    LikeValue,
    Id,
}

impl SortField for CommentSortField {
    const FIELDS: &'static [(&'static str, Self)] = &[
        ("create_time", CommentSortField::CreateTime),
        ("like_value", CommentSortField::LikeValue),
        ("id", CommentSortField::Id),
    ];
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum BlogQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (read side, live rows only)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait BlogQuery: Send + Sync {
    /// `None` for unknown and soft-deleted blogs alike.
    async fn find_blog(&self, blog_id: i32) -> Result<Option<BlogView>, BlogQueryError>;

    async fn find_comment(&self, comment_id: i32) -> Result<Option<CommentView>, BlogQueryError>;

    /// All live blogs, or only those of `author` when given.
    async fn list_blogs(
        &self,
        author: Option<UserId>,
        query: ListQuery<BlogSortField>,
    ) -> Result<PageResult<BlogView>, BlogQueryError>;

    async fn list_comments(
        &self,
        blog_id: i32,
        query: ListQuery<CommentSortField>,
    ) -> Result<PageResult<CommentView>, BlogQueryError>;
}
