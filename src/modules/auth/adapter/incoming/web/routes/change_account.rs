use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::auth::application::use_cases::change_account::{
    ChangeAccountError, ChangeAccountInput, ChangeAccountOutcome,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use tracing::{error, info, warn};

/// Change email and password
///
/// A real change deactivates the account, ends the session and mails a new
/// confirmation link.
#[utoipa::path(
    post,
    path = "/account",
    tag = "auth",
    security(("token" = [])),
    request_body = ChangeAccountInput,
    responses(
        (
            status = 200,
            description = "`Success` when changed, `Not Change` when identical",
            body = inline(SuccessResponse<String>),
            example = json!({ "code": 0, "message": "success", "result": "Not Change" })
        ),
        (status = 400, description = "Validation error or email taken", body = ErrorResponse),
        (status = 401, description = "Not logged in", body = ErrorResponse),
        (status = 500, description = "Storage, cache or mail failure", body = ErrorResponse),
    )
)]
#[post("/account")]
pub async fn change_account_handler(
    user: AuthenticatedUser,
    req: web::Json<ChangeAccountInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = user.user_id;

    match data
        .change_account_use_case
        .execute(user_id, req.into_inner())
        .await
    {
        Ok(ChangeAccountOutcome::NotChanged) => {
            info!(user_id = %user_id, "Account change requested with identical credentials");
            ApiResponse::success("Not Change")
        }

        Ok(ChangeAccountOutcome::Changed) => {
            info!(user_id = %user_id, "Account changed");
            ApiResponse::success("Success")
        }

        Err(ChangeAccountError::InvalidInput(ref e)) => {
            warn!(user_id = %user_id, error = %e, "Invalid account change input");
            ApiResponse::invalid_field(e.field(), &e.to_string())
        }

        Err(ChangeAccountError::EmailTaken) => {
            warn!(user_id = %user_id, "Account change rejected: email taken");
            ApiResponse::invalid_field("email", "Email already registered")
        }

        Err(ChangeAccountError::UserNotFound) => {
            warn!(user_id = %user_id, "Session owner no longer exists");
            ApiResponse::not_found()
        }

        Err(ChangeAccountError::RepositoryError(ref e)) => {
            error!(user_id = %user_id, error = %e, "Credential update failed");
            ApiResponse::storage_error()
        }

        Err(
            ref e @ (ChangeAccountError::HashingFailed(_)
            | ChangeAccountError::CacheError(_)
            | ChangeAccountError::EmailFailed(_)),
        ) => {
            error!(user_id = %user_id, error = %e, "Account change failed");
            ApiResponse::internal_error()
        }
    }
}
