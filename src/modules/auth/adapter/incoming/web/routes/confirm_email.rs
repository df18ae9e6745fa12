use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::MaybeAuthenticated;
use crate::auth::application::domain::entities::token_fingerprint;
use crate::auth::application::use_cases::confirm_email::{ConfirmEmailError, ConfirmEmailResponse};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, Responder};
use tracing::{error, info, warn};

/// Confirm an email address
///
/// Consumes the confirmation token from the mailed link, activates the
/// account and logs it in.
#[utoipa::path(
    get,
    path = "/confirm/{token}",
    tag = "auth",
    params(("token" = String, Path, description = "Confirmation token from the mail")),
    responses(
        (
            status = 200,
            description = "Account confirmed",
            body = inline(SuccessResponse<ConfirmEmailResponse>),
            example = json!({
                "code": 0,
                "message": "success",
                "result": { "token": "aB3dE5gH7jK9mN1pQ3sT" }
            })
        ),
        (
            status = 401,
            description = "Token unknown, consumed or already confirmed, or caller already logged in",
            body = ErrorResponse,
            example = json!({ "code": 1002, "message": "invalid request parameters" })
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse
        ),
    )
)]
#[get("/confirm/{token}")]
pub async fn confirm_email_handler(
    current: MaybeAuthenticated,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let token = path.into_inner();
    let fingerprint = token_fingerprint(&token);

    match data
        .confirm_email_use_case
        .execute(&token, current.user().is_some())
        .await
    {
        Ok(response) => {
            info!(token = %fingerprint, "Email confirmed");
            ApiResponse::success(response)
        }

        Err(
            e @ (ConfirmEmailError::InvalidOrExpiredToken
            | ConfirmEmailError::AlreadyConfirmed
            | ConfirmEmailError::AlreadyAuthenticated),
        ) => {
            warn!(token = %fingerprint, error = %e, "Confirmation rejected");
            ApiResponse::rejected()
        }

        Err(ConfirmEmailError::CacheError(ref e)) => {
            error!(error = %e, "Token cache failure during confirmation");
            ApiResponse::internal_error()
        }

        Err(ConfirmEmailError::RepositoryError(ref e)) => {
            error!(error = %e, "User activation failed");
            ApiResponse::storage_error()
        }
    }
}
