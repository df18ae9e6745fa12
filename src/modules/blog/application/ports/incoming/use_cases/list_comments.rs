use async_trait::async_trait;

use crate::modules::blog::application::ports::outgoing::CommentView;
use crate::shared::pagination::{ListParams, ListParamsError, PageResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListCommentsError {
    #[error(transparent)]
    InvalidParams(#[from] ListParamsError),

    #[error("Blog not found")]
    BlogNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListCommentsUseCase: Send + Sync {
    async fn execute(
        &self,
        blog_id: i32,
        params: ListParams,
    ) -> Result<PageResult<CommentView>, ListCommentsError>;
}
