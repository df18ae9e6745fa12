use actix_web::{get, web, Responder};
use tracing::{error, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::blog::application::ports::incoming::use_cases::ListCommentsError;
use crate::modules::blog::application::ports::outgoing::CommentView;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::{ListParams, PageResult};
use crate::AppState;

/// List live comments of a blog
///
/// Sortable by `create_time`, `like_value`, `id`.
#[utoipa::path(
    get,
    path = "/blogs/{blog_id}/comments",
    tag = "comment",
    params(("blog_id" = i32, Path, description = "Blog id"), ListParams),
    responses(
        (status = 200, description = "One page of comments", body = inline(SuccessResponse<PageResult<CommentView>>)),
        (status = 400, description = "Bad page, count, sort or desc", body = ErrorResponse),
        (status = 404, description = "Unknown or deleted blog", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
#[get("/blogs/{blog_id}/comments")]
pub async fn get_comments_handler(
    path: web::Path<i32>,
    params: web::Query<ListParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let blog_id = path.into_inner();

    match data
        .blog
        .get_comments
        .execute(blog_id, params.into_inner())
        .await
    {
        Ok(page) => ApiResponse::success(page),

        Err(ListCommentsError::InvalidParams(e)) => {
            warn!(blog_id, error = %e, "Invalid comment list parameters");
            ApiResponse::invalid_field(e.field(), &e.to_string())
        }

        Err(ListCommentsError::BlogNotFound) => ApiResponse::not_found(),

        Err(ListCommentsError::QueryError(e)) => {
            error!(blog_id, error = %e, "Failed to list comments");
            ApiResponse::storage_error()
        }
    }
}
