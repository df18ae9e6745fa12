// src/modules/blog/application/ports/outgoing/blog_repository.rs

use async_trait::async_trait;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::auth::application::domain::entities::UserId;

//
// ──────────────────────────────────────────────────────────
// Command DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateBlogData {
    #[schema(example = "First post")]
    pub title: String,
    #[schema(example = "Hello world")]
    pub content: String,
}

/// The only blog fields an author may change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct PatchBlogData {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PatchBlogData {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

/// Ownership and lifecycle state of a blog, deleted rows included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlogRecord {
    pub id: i32,
    pub author_id: UserId,
    pub is_delete: bool,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum BlogRepositoryError {
    #[error("Blog not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (command side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Returns the new blog id.
    async fn create(&self, author: UserId, data: CreateBlogData) -> Result<i32, BlogRepositoryError>;

    async fn find_record(&self, blog_id: i32) -> Result<Option<BlogRecord>, BlogRepositoryError>;

    /// Applies only the fields that are set, on a live blog.
    async fn patch(&self, blog_id: i32, data: PatchBlogData) -> Result<(), BlogRepositoryError>;

    /// `active -> deleted`; a second call reports `NotFound`.
    async fn soft_delete(&self, blog_id: i32) -> Result<(), BlogRepositoryError>;
}
