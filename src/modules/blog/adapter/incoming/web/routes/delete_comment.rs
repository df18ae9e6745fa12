use actix_web::{delete, web, Responder};
use tracing::{error, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::blog::application::ports::incoming::use_cases::DeleteCommentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Soft-delete an own comment
#[utoipa::path(
    delete,
    path = "/comments/{comment_id}",
    tag = "comment",
    security(("token" = [])),
    params(("comment_id" = i32, Path, description = "Comment id")),
    responses(
        (status = 200, description = "Deleted", body = inline(SuccessResponse<String>)),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 403, description = "Comment of another user", body = ErrorResponse),
        (status = 404, description = "Unknown or already deleted comment", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
#[delete("/comments/{comment_id}")]
pub async fn delete_comment_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let comment_id = path.into_inner();

    match data
        .blog
        .soft_delete_comment
        .execute(user.user_id, comment_id)
        .await
    {
        Ok(()) => ApiResponse::success("Success"),

        Err(DeleteCommentError::NotFound) => ApiResponse::not_found(),

        Err(DeleteCommentError::Forbidden) => {
            warn!(comment_id, user_id = %user.user_id, "Delete of foreign comment rejected");
            ApiResponse::forbidden()
        }

        Err(DeleteCommentError::RepositoryError(e)) => {
            error!(comment_id, error = %e, "Failed to delete comment");
            ApiResponse::storage_error()
        }
    }
}
