// src/modules/blog/application/ports/outgoing/comment_repository.rs

use async_trait::async_trait;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateCommentData {
    #[schema(example = "Nice post")]
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentRecord {
    pub id: i32,
    pub author_id: UserId,
    pub blog_id: i32,
    pub is_delete: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CommentRepositoryError {
    #[error("Comment not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Returns the new comment id. The caller checks the blog is live.
    async fn create(
        &self,
        author: UserId,
        blog_id: i32,
        content: String,
    ) -> Result<i32, CommentRepositoryError>;

    async fn find_record(
        &self,
        comment_id: i32,
    ) -> Result<Option<CommentRecord>, CommentRepositoryError>;

    async fn soft_delete(&self, comment_id: i32) -> Result<(), CommentRepositoryError>;
}
