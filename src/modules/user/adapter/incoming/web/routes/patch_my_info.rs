use actix_web::{patch, web, Responder};
use tracing::{error, info, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::modules::user::application::ports::incoming::use_cases::PatchMyInfoError;
use crate::modules::user::application::ports::outgoing::{OwnProfileView, PatchProfileData};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Update username and/or gender of the logged-in user
#[utoipa::path(
    patch,
    path = "/my/info",
    tag = "user",
    security(("token" = [])),
    request_body = PatchProfileData,
    responses(
        (status = 200, description = "Updated own profile", body = inline(SuccessResponse<OwnProfileView>)),
        (status = 400, description = "Empty patch, unknown or invalid field", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 404, description = "Session owner no longer exists", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
#[patch("/my/info")]
pub async fn patch_my_info_handler(
    user: AuthenticatedUser,
    req: web::Json<PatchProfileData>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = user.user_id;

    match data.user.patch_my_info.execute(user_id, req.into_inner()).await {
        Ok(profile) => {
            info!(user_id = %user_id, "Profile updated");
            ApiResponse::success(profile)
        }

        Err(PatchMyInfoError::InvalidField { field, message }) => {
            warn!(user_id = %user_id, field, "Invalid profile patch");
            ApiResponse::invalid_field(field, &message)
        }

        Err(PatchMyInfoError::EmptyPatch) => ApiResponse::bad_request("No fields to update"),

        Err(PatchMyInfoError::NotFound) => {
            warn!(user_id = %user_id, "Session owner no longer exists");
            ApiResponse::not_found()
        }

        Err(PatchMyInfoError::RepositoryError(e)) => {
            error!(user_id = %user_id, error = %e, "Profile update failed");
            ApiResponse::storage_error()
        }
    }
}
