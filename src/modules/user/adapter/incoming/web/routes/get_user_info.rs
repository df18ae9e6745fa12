use actix_web::{get, web, Responder};
use tracing::{error, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::entities::UserId;
use crate::modules::user::application::ports::incoming::use_cases::GetUserInfoError;
use crate::modules::user::application::ports::outgoing::ProfileView;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Public profile of any user
#[utoipa::path(
    get,
    path = "/{user_id}/info",
    tag = "user",
    params(("user_id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "Public profile", body = inline(SuccessResponse<ProfileView>)),
        (status = 404, description = "No such user", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
#[get("/{user_id}/info")]
pub async fn get_user_info_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = UserId::from(path.into_inner());

    match data.user.get_info.execute(user_id).await {
        Ok(profile) => ApiResponse::success(profile),

        Err(GetUserInfoError::NotFound) => {
            warn!(user_id = %user_id, "User info requested for unknown user");
            ApiResponse::not_found()
        }

        Err(GetUserInfoError::QueryError(e)) => {
            error!(user_id = %user_id, error = %e, "Failed to load user info");
            ApiResponse::storage_error()
        }
    }
}
