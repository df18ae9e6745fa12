use actix_web::{get, web, HttpResponse, Responder};
use tracing::{error, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::UserId;
use crate::modules::blog::application::ports::incoming::use_cases::ListBlogsError;
use crate::modules::blog::application::ports::outgoing::BlogView;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::{ListParams, PageResult};
use crate::AppState;

fn respond(result: Result<PageResult<BlogView>, ListBlogsError>) -> HttpResponse {
    match result {
        Ok(page) => ApiResponse::success(page),

        Err(ListBlogsError::InvalidParams(e)) => {
            warn!(error = %e, "Invalid blog list parameters");
            ApiResponse::invalid_field(e.field(), &e.to_string())
        }

        Err(ListBlogsError::AuthorNotFound) => ApiResponse::not_found(),

        Err(ListBlogsError::QueryError(e)) => {
            error!(error = %e, "Failed to list blogs");
            ApiResponse::storage_error()
        }
    }
}

/// List live blogs
///
/// Sortable by `create_time`, `last_update_time`, `like_value`, `title`, `id`.
#[utoipa::path(
    get,
    path = "/blogs",
    tag = "blog",
    params(ListParams),
    responses(
        (status = 200, description = "One page of blogs", body = inline(SuccessResponse<PageResult<BlogView>>)),
        (status = 400, description = "Bad page, count, sort or desc", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
#[get("/blogs")]
pub async fn get_blogs_handler(
    params: web::Query<ListParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    respond(data.blog.get_list.execute(None, params.into_inner()).await)
}

/// List live blogs of one author
#[utoipa::path(
    get,
    path = "/{user_id}/blogs",
    tag = "blog",
    params(("user_id" = i32, Path, description = "Author id"), ListParams),
    responses(
        (status = 200, description = "One page of the author's blogs", body = inline(SuccessResponse<PageResult<BlogView>>)),
        (status = 400, description = "Bad page, count, sort or desc", body = ErrorResponse),
        (status = 404, description = "No such author", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
#[get("/{user_id}/blogs")]
pub async fn get_user_blogs_handler(
    path: web::Path<i32>,
    params: web::Query<ListParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let author = UserId::from(path.into_inner());
    respond(
        data.blog
            .get_list
            .execute(Some(author), params.into_inner())
            .await,
    )
}
