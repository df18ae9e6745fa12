use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::blog::application::ports::outgoing::BlogView;
use crate::shared::pagination::{ListParams, ListParamsError, PageResult};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListBlogsError {
    #[error(transparent)]
    InvalidParams(#[from] ListParamsError),

    #[error("Author not found")]
    AuthorNotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ListBlogsUseCase: Send + Sync {
    /// Every live blog, or those of one existing author.
    async fn execute(
        &self,
        author: Option<UserId>,
        params: ListParams,
    ) -> Result<PageResult<BlogView>, ListBlogsError>;
}
