use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::modules::blog::application::domain::content::validate_content;
use crate::modules::blog::application::ports::incoming::use_cases::{
    CreateCommentError, CreateCommentUseCase,
};
use crate::modules::blog::application::ports::outgoing::{
    BlogQuery, BlogQueryError, CommentRepository, CommentView, CreateCommentData,
};

pub struct CreateCommentService<C, Q>
where
    C: CommentRepository,
    Q: BlogQuery,
{
    comments: C,
    query: Q,
}

impl<C, Q> CreateCommentService<C, Q>
where
    C: CommentRepository,
    Q: BlogQuery,
{
    pub fn new(comments: C, query: Q) -> Self {
        Self { comments, query }
    }
}

fn query_err(e: BlogQueryError) -> CreateCommentError {
    CreateCommentError::RepositoryError(e.to_string())
}

#[async_trait]
impl<C, Q> CreateCommentUseCase for CreateCommentService<C, Q>
where
    C: CommentRepository + Send + Sync,
    Q: BlogQuery + Send + Sync,
{
    async fn execute(
        &self,
        author: UserId,
        blog_id: i32,
        data: CreateCommentData,
    ) -> Result<CommentView, CreateCommentError> {
        let content =
            validate_content(&data.content).map_err(|e| CreateCommentError::InvalidField {
                field: e.field(),
                message: e.to_string(),
            })?;

        self.query
            .find_blog(blog_id)
            .await
            .map_err(query_err)?
            .ok_or(CreateCommentError::BlogNotFound)?;

        let comment_id = self
            .comments
            .create(author, blog_id, content)
            .await
            .map_err(|e| CreateCommentError::RepositoryError(e.to_string()))?;

        info!(comment_id, blog_id, author = %author, "Comment created");

        self.query
            .find_comment(comment_id)
            .await
            .map_err(query_err)?
            .ok_or_else(|| {
                CreateCommentError::RepositoryError(format!(
                    "comment {comment_id} missing after insert"
                ))
            })
    }
}
