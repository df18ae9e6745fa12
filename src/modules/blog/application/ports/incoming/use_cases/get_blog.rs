use async_trait::async_trait;

use crate::modules::blog::application::ports::outgoing::BlogView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetBlogError {
    #[error("Blog not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetBlogUseCase: Send + Sync {
    async fn execute(&self, blog_id: i32) -> Result<BlogView, GetBlogError>;
}
