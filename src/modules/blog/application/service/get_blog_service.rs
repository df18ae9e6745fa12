use async_trait::async_trait;

use crate::modules::blog::application::ports::incoming::use_cases::{GetBlogError, GetBlogUseCase};
use crate::modules::blog::application::ports::outgoing::{BlogQuery, BlogView};

pub struct GetBlogService<Q>
where
    Q: BlogQuery,
{
    query: Q,
}

impl<Q> GetBlogService<Q>
where
    Q: BlogQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetBlogUseCase for GetBlogService<Q>
where
    Q: BlogQuery + Send + Sync,
{
    async fn execute(&self, blog_id: i32) -> Result<BlogView, GetBlogError> {
        self.query
            .find_blog(blog_id)
            .await
            .map_err(|e| GetBlogError::QueryError(e.to_string()))?
            .ok_or(GetBlogError::NotFound)
    }
}
