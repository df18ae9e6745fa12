use actix_web::{post, web, Responder};
use tracing::{error, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::blog::application::ports::incoming::use_cases::CreateBlogError;
use crate::modules::blog::application::ports::outgoing::{BlogView, CreateBlogData};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Publish a blog
#[utoipa::path(
    post,
    path = "/blog",
    tag = "blog",
    security(("token" = [])),
    request_body = CreateBlogData,
    responses(
        (status = 201, description = "Blog created", body = inline(SuccessResponse<BlogView>)),
        (status = 400, description = "Missing or invalid title/content", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
#[post("/blog")]
pub async fn create_blog_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateBlogData>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.blog.create.execute(user.user_id, req.into_inner()).await {
        Ok(blog) => ApiResponse::created(blog),

        Err(CreateBlogError::InvalidField { field, message }) => {
            warn!(user_id = %user.user_id, field, "Invalid blog");
            ApiResponse::invalid_field(field, &message)
        }

        Err(CreateBlogError::RepositoryError(e)) => {
            error!(user_id = %user.user_id, error = %e, "Failed to create blog");
            ApiResponse::storage_error()
        }
    }
}
