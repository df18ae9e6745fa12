use actix_web::{post, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::blog::application::ports::incoming::use_cases::CreateCommentError;
use crate::modules::blog::application::ports::outgoing::{CommentView, CreateCommentData};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Comment on a live blog
#[utoipa::path(
    post,
    path = "/blogs/{blog_id}/comments",
    tag = "comment",
    security(("token" = [])),
    params(("blog_id" = i32, Path, description = "Blog id")),
    request_body = CreateCommentData,
    responses(
        (status = 201, description = "Comment created", body = inline(SuccessResponse<CommentView>)),
        (status = 400, description = "Blank content", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 404, description = "Unknown or deleted blog", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
#[post("/blogs/{blog_id}/comments")]
pub async fn create_comment_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    req: web::Json<CreateCommentData>,
    data: web::Data<AppState>,
) -> impl Responder {
    let blog_id = path.into_inner();

    match data
        .blog
        .create_comment
        .execute(user.user_id, blog_id, req.into_inner())
        .await
    {
        Ok(comment) => ApiResponse::created(comment),

        Err(CreateCommentError::InvalidField { field, message }) => {
            ApiResponse::invalid_field(field, &message)
        }

        Err(CreateCommentError::BlogNotFound) => ApiResponse::not_found(),

        Err(CreateCommentError::RepositoryError(e)) => {
            error!(blog_id, user_id = %user.user_id, error = %e, "Failed to create comment");
            ApiResponse::storage_error()
        }
    }
}
