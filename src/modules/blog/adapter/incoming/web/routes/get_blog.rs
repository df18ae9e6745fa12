use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::blog::application::ports::incoming::use_cases::GetBlogError;
use crate::modules::blog::application::ports::outgoing::BlogView;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/blogs/{blog_id}",
    tag = "blog",
    params(("blog_id" = i32, Path, description = "Blog id")),
    responses(
        (status = 200, description = "Blog with author", body = inline(SuccessResponse<BlogView>)),
        (status = 404, description = "Unknown or deleted blog", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
#[get("/blogs/{blog_id}")]
pub async fn get_blog_handler(path: web::Path<i32>, data: web::Data<AppState>) -> impl Responder {
    let blog_id = path.into_inner();

    match data.blog.get_single.execute(blog_id).await {
        Ok(blog) => ApiResponse::success(blog),
        Err(GetBlogError::NotFound) => ApiResponse::not_found(),
        Err(GetBlogError::QueryError(e)) => {
            error!(blog_id, error = %e, "Failed to load blog");
            ApiResponse::storage_error()
        }
    }
}
