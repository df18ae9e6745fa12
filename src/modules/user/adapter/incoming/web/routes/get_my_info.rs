use actix_web::{get, web, Responder};
use tracing::{error, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::user::application::ports::incoming::use_cases::GetMyInfoError;
use crate::modules::user::application::ports::outgoing::OwnProfileView;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Profile of the logged-in user, including email
#[utoipa::path(
    get,
    path = "/my/info",
    tag = "user",
    security(("token" = [])),
    responses(
        (status = 200, description = "Own profile", body = inline(SuccessResponse<OwnProfileView>)),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 404, description = "Session owner no longer exists", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
#[get("/my/info")]
pub async fn get_my_info_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.user.get_my_info.execute(user.user_id).await {
        Ok(profile) => ApiResponse::success(profile),

        Err(GetMyInfoError::NotFound) => {
            warn!(user_id = %user.user_id, "Session owner no longer exists");
            ApiResponse::not_found()
        }

        Err(GetMyInfoError::QueryError(e)) => {
            error!(user_id = %user.user_id, error = %e, "Failed to load own profile");
            ApiResponse::storage_error()
        }
    }
}
