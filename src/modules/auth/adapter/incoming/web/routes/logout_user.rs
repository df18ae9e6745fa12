use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::use_cases::logout_user::LogoutError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use tracing::{error, info};

/// Logout
///
/// Revokes the caller's session token.
#[utoipa::path(
    post,
    path = "/logout",
    tag = "auth",
    security(("token" = [])),
    responses(
        (
            status = 200,
            description = "Session revoked",
            body = inline(SuccessResponse<String>),
            example = json!({ "code": 0, "message": "success", "result": "Success" })
        ),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 500, description = "Token cache failure", body = ErrorResponse),
    )
)]
#[post("/logout")]
pub async fn logout_user_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.logout_user_use_case.execute(user.user_id).await {
        Ok(()) => {
            info!(user_id = %user.user_id, "User logged out successfully");
            ApiResponse::success("Success")
        }

        Err(LogoutError::TokenRevocationFailed(ref e)) => {
            error!(user_id = %user.user_id, error = %e, "Token revocation failed during logout");
            ApiResponse::internal_error()
        }
    }
}
