use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::blog::application::ports::outgoing::{CommentView, CreateCommentData};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateCommentError {
    #[error("{field}: {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },

    #[error("Blog not found")]
    BlogNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateCommentUseCase: Send + Sync {
    async fn execute(
        &self,
        author: UserId,
        blog_id: i32,
        data: CreateCommentData,
    ) -> Result<CommentView, CreateCommentError>;
}
