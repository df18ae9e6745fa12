use actix_web::{patch, web, Responder};
use tracing::{error, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::blog::application::ports::incoming::use_cases::PatchBlogError;
use crate::modules::blog::application::ports::outgoing::{BlogView, PatchBlogData};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Edit title and/or content of an own blog
#[utoipa::path(
    patch,
    path = "/blogs/{blog_id}",
    tag = "blog",
    security(("token" = [])),
    params(("blog_id" = i32, Path, description = "Blog id")),
    request_body = PatchBlogData,
    responses(
        (status = 200, description = "Updated blog", body = inline(SuccessResponse<BlogView>)),
        (status = 400, description = "Empty patch, unknown or invalid field", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 403, description = "Blog of another user", body = ErrorResponse),
        (status = 404, description = "Unknown blog, or own deleted blog", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
#[patch("/blogs/{blog_id}")]
pub async fn patch_blog_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    req: web::Json<PatchBlogData>,
    data: web::Data<AppState>,
) -> impl Responder {
    let blog_id = path.into_inner();

    match data
        .blog
        .patch
        .execute(user.user_id, blog_id, req.into_inner())
        .await
    {
        Ok(blog) => ApiResponse::success(blog),

        Err(PatchBlogError::InvalidField { field, message }) => {
            ApiResponse::invalid_field(field, &message)
        }

        Err(PatchBlogError::EmptyPatch) => ApiResponse::bad_request("No fields to update"),

        Err(PatchBlogError::NotFound) => ApiResponse::not_found(),

        Err(PatchBlogError::Forbidden) => {
            warn!(blog_id, user_id = %user.user_id, "Patch of foreign blog rejected");
            ApiResponse::forbidden()
        }

        Err(PatchBlogError::RepositoryError(e)) => {
            error!(blog_id, error = %e, "Failed to patch blog");
            ApiResponse::storage_error()
        }
    }
}
