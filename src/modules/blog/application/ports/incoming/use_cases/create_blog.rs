use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::blog::application::ports::outgoing::{BlogView, CreateBlogData};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateBlogError {
    #[error("{field}: {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateBlogUseCase: Send + Sync {
    async fn execute(&self, author: UserId, data: CreateBlogData)
        -> Result<BlogView, CreateBlogError>;
}
