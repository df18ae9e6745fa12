use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::modules::blog::application::domain::content::{
    validate_content, validate_title, ContentError,
};
use crate::modules::blog::application::domain::ownership::{owner_access, OwnerAccess};
use crate::modules::blog::application::ports::incoming::use_cases::{
    PatchBlogError, PatchBlogUseCase,
};
use crate::modules::blog::application::ports::outgoing::{
    BlogQuery, BlogRepository, BlogRepositoryError, BlogView, PatchBlogData,
};

pub struct PatchBlogService<R, Q>
where
    R: BlogRepository,
    Q: BlogQuery,
{
    repository: R,
    query: Q,
}

impl<R, Q> PatchBlogService<R, Q>
where
    R: BlogRepository,
    Q: BlogQuery,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

fn invalid(e: ContentError) -> PatchBlogError {
    PatchBlogError::InvalidField {
        field: e.field(),
        message: e.to_string(),
    }
}

fn validate(data: PatchBlogData) -> Result<PatchBlogData, PatchBlogError> {
    if data.is_empty() {
        return Err(PatchBlogError::EmptyPatch);
    }

    Ok(PatchBlogData {
        title: data
            .title
            .as_deref()
            .map(validate_title)
            .transpose()
            .map_err(invalid)?,
        content: data
            .content
            .as_deref()
            .map(validate_content)
            .transpose()
            .map_err(invalid)?,
    })
}

fn repository_err(e: BlogRepositoryError) -> PatchBlogError {
    match e {
        BlogRepositoryError::NotFound => PatchBlogError::NotFound,
        BlogRepositoryError::DatabaseError(msg) => PatchBlogError::RepositoryError(msg),
    }
}

#[async_trait]
impl<R, Q> PatchBlogUseCase for PatchBlogService<R, Q>
where
    R: BlogRepository + Send + Sync,
    Q: BlogQuery + Send + Sync,
{
    async fn execute(
        &self,
        current_user: UserId,
        blog_id: i32,
        data: PatchBlogData,
    ) -> Result<BlogView, PatchBlogError> {
        let data = validate(data)?;

        let record = self
            .repository
            .find_record(blog_id)
            .await
            .map_err(repository_err)?
            .ok_or(PatchBlogError::NotFound)?;

        match owner_access(record.author_id, current_user, record.is_delete) {
            OwnerAccess::Granted => {}
            OwnerAccess::Forbidden => return Err(PatchBlogError::Forbidden),
            OwnerAccess::Gone => return Err(PatchBlogError::NotFound),
        }

        self.repository
            .patch(blog_id, data)
            .await
            .map_err(repository_err)?;

        info!(blog_id, user_id = %current_user, "Blog patched");

        self.query
            .find_blog(blog_id)
            .await
            .map_err(|e| PatchBlogError::RepositoryError(e.to_string()))?
            .ok_or(PatchBlogError::NotFound)
    }
}
