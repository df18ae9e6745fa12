use async_trait::async_trait;

use crate::modules::blog::application::ports::incoming::use_cases::{
    ListCommentsError, ListCommentsUseCase,
};
use crate::modules::blog::application::ports::outgoing::{
    BlogQuery, CommentSortField, CommentView,
};
use crate::shared::pagination::{ListParams, PageResult};

pub struct ListCommentsService<Q>
where
    Q: BlogQuery,
{
    query: Q,
}

impl<Q> ListCommentsService<Q>
where
    Q: BlogQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListCommentsUseCase for ListCommentsService<Q>
where
    Q: BlogQuery + Send + Sync,
{
    async fn execute(
        &self,
        blog_id: i32,
        params: ListParams,
    ) -> Result<PageResult<CommentView>, ListCommentsError> {
        let query = params.into_query::<CommentSortField>()?;

        self.query
            .find_blog(blog_id)
            .await
            .map_err(|e| ListCommentsError::QueryError(e.to_string()))?
            .ok_or(ListCommentsError::BlogNotFound)?;

        self.query
            .list_comments(blog_id, query)
            .await
            .map_err(|e| ListCommentsError::QueryError(e.to_string()))
    }
}
