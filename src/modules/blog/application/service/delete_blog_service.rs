use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::modules::blog::application::domain::ownership::{owner_access, OwnerAccess};
use crate::modules::blog::application::ports::incoming::use_cases::{
    DeleteBlogError, DeleteBlogUseCase,
};
use crate::modules::blog::application::ports::outgoing::{BlogRepository, BlogRepositoryError};

pub struct DeleteBlogService<R>
where
    R: BlogRepository,
{
    repository: R,
}

impl<R> DeleteBlogService<R>
where
    R: BlogRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

impl From<BlogRepositoryError> for DeleteBlogError {
    fn from(e: BlogRepositoryError) -> Self {
        match e {
            BlogRepositoryError::NotFound => DeleteBlogError::NotFound,
            BlogRepositoryError::DatabaseError(msg) => DeleteBlogError::RepositoryError(msg),
        }
    }
}

#[async_trait]
impl<R> DeleteBlogUseCase for DeleteBlogService<R>
where
    R: BlogRepository + Send + Sync,
{
    async fn execute(&self, current_user: UserId, blog_id: i32) -> Result<(), DeleteBlogError> {
        let record = self
            .repository
            .find_record(blog_id)
            .await?
            .ok_or(DeleteBlogError::NotFound)?;

        match owner_access(record.author_id, current_user, record.is_delete) {
            OwnerAccess::Granted => {}
            OwnerAccess::Forbidden => return Err(DeleteBlogError::Forbidden),
            OwnerAccess::Gone => return Err(DeleteBlogError::NotFound),
        }

        self.repository.soft_delete(blog_id).await?;

        info!(blog_id, user_id = %current_user, "Blog soft-deleted");
        Ok(())
    }
}
