use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::modules::blog::application::domain::ownership::{owner_access, OwnerAccess};
use crate::modules::blog::application::ports::incoming::use_cases::{
    DeleteCommentError, DeleteCommentUseCase,
};
use crate::modules::blog::application::ports::outgoing::{
    CommentRepository, CommentRepositoryError,
};

pub struct DeleteCommentService<C>
where
    C: CommentRepository,
{
    comments: C,
}

impl<C> DeleteCommentService<C>
where
    C: CommentRepository,
{
    pub fn new(comments: C) -> Self {
        Self { comments }
    }
}

impl From<CommentRepositoryError> for DeleteCommentError {
    fn from(e: CommentRepositoryError) -> Self {
        match e {
            CommentRepositoryError::NotFound => DeleteCommentError::NotFound,
            CommentRepositoryError::DatabaseError(msg) => DeleteCommentError::RepositoryError(msg),
        }
    }
}

#[async_trait]
impl<C> DeleteCommentUseCase for DeleteCommentService<C>
where
    C: CommentRepository + Send + Sync,
{
    async fn execute(
        &self,
        current_user: UserId,
        comment_id: i32,
    ) -> Result<(), DeleteCommentError> {
        let record = self
            .comments
            .find_record(comment_id)
            .await?
            .ok_or(DeleteCommentError::NotFound)?;

        match owner_access(record.author_id, current_user, record.is_delete) {
            OwnerAccess::Granted => {}
            OwnerAccess::Forbidden => return Err(DeleteCommentError::Forbidden),
            OwnerAccess::Gone => return Err(DeleteCommentError::NotFound),
        }

        self.comments.soft_delete(comment_id).await?;

        info!(comment_id, blog_id = record.blog_id, user_id = %current_user, "Comment soft-deleted");
        Ok(())
    }
}
