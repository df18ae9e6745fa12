use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeleteBlogError {
    #[error("Blog not found")]
    NotFound,

    #[error("Blog belongs to another user")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteBlogUseCase: Send + Sync {
    /// Soft delete; the row stays but disappears from every read.
    async fn execute(&self, current_user: UserId, blog_id: i32) -> Result<(), DeleteBlogError>;
}
