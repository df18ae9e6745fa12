use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::blog::application::ports::outgoing::{BlogView, PatchBlogData};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatchBlogError {
    #[error("{field}: {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },

    #[error("No fields to update")]
    EmptyPatch,

    /// Unknown blog, or a deleted blog of the caller
    #[error("Blog not found")]
    NotFound,

    #[error("Blog belongs to another user")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait PatchBlogUseCase: Send + Sync {
    async fn execute(
        &self,
        current_user: UserId,
        blog_id: i32,
        data: PatchBlogData,
    ) -> Result<BlogView, PatchBlogError>;
}
