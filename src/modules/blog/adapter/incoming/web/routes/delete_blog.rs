use actix_web::{delete, web, Responder};
use tracing::{error, info, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::blog::application::ports::incoming::use_cases::DeleteBlogError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Soft-delete an own blog
#[utoipa::path(
    delete,
    path = "/blogs/{blog_id}",
    tag = "blog",
    security(("token" = [])),
    params(("blog_id" = i32, Path, description = "Blog id")),
    responses(
        (status = 200, description = "Deleted", body = inline(SuccessResponse<String>)),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 403, description = "Blog of another user", body = ErrorResponse),
        (status = 404, description = "Unknown or already deleted blog", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
#[delete("/blogs/{blog_id}")]
pub async fn delete_blog_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let blog_id = path.into_inner();

    match data.blog.soft_delete.execute(user.user_id, blog_id).await {
        Ok(()) => {
            info!(blog_id, user_id = %user.user_id, "Blog deleted");
            ApiResponse::success("Success")
        }

        Err(DeleteBlogError::NotFound) => ApiResponse::not_found(),

        Err(DeleteBlogError::Forbidden) => {
            warn!(blog_id, user_id = %user.user_id, "Delete of foreign blog rejected");
            ApiResponse::forbidden()
        }

        Err(DeleteBlogError::RepositoryError(e)) => {
            error!(blog_id, error = %e, "Failed to delete blog");
            ApiResponse::storage_error()
        }
    }
}
