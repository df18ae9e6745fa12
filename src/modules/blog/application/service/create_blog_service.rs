use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::modules::blog::application::domain::content::{
    validate_content, validate_title, ContentError,
};
use crate::modules::blog::application::ports::incoming::use_cases::{
    CreateBlogError, CreateBlogUseCase,
};
use crate::modules::blog::application::ports::outgoing::{
    BlogQuery, BlogRepository, BlogView, CreateBlogData,
};

pub struct CreateBlogService<R, Q>
where
    R: BlogRepository,
    Q: BlogQuery,
{
    repository: R,
    query: Q,
}

impl<R, Q> CreateBlogService<R, Q>
where
    R: BlogRepository,
    Q: BlogQuery,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

fn invalid(e: ContentError) -> CreateBlogError {
    CreateBlogError::InvalidField {
        field: e.field(),
        message: e.to_string(),
    }
}

#[async_trait]
impl<R, Q> CreateBlogUseCase for CreateBlogService<R, Q>
where
    R: BlogRepository + Send + Sync,
    Q: BlogQuery + Send + Sync,
{
    async fn execute(
        &self,
        author: UserId,
        data: CreateBlogData,
    ) -> Result<BlogView, CreateBlogError> {
        let data = CreateBlogData {
            title: validate_title(&data.title).map_err(invalid)?,
            content: validate_content(&data.content).map_err(invalid)?,
        };

        let blog_id = self
            .repository
            .create(author, data)
            .await
            .map_err(|e| CreateBlogError::RepositoryError(e.to_string()))?;

        info!(blog_id, author = %author, "Blog created");

        self.query
            .find_blog(blog_id)
            .await
            .map_err(|e| CreateBlogError::RepositoryError(e.to_string()))?
            .ok_or_else(|| {
                CreateBlogError::RepositoryError(format!("blog {blog_id} missing after insert"))
            })
    }
}
