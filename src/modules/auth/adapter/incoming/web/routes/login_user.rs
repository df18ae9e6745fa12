use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::MaybeAuthenticated;
use crate::auth::application::use_cases::login_user::{
    LoginError, LoginRequest, LoginRequestDto, LoginUserResponse,
};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use tracing::{error, info, warn};

/// User login
///
/// Exchanges email and password for a session token. Calling it with a live
/// token in the `Authorization` header returns that same token.
#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (
            status = 200,
            description = "Login successful",
            body = inline(SuccessResponse<LoginUserResponse>),
            example = json!({
                "code": 0,
                "message": "success",
                "result": { "token": "aB3dE5gH7jK9mN1pQ3sT" }
            })
        ),
        (
            status = 400,
            description = "Validation error or wrong email/password",
            body = ErrorResponse,
            example = json!({
                "code": 1001,
                "message": "invalid account or password"
            })
        ),
        (
            status = 500,
            description = "Internal server error",
            body = ErrorResponse
        ),
    )
)]
#[post("/login")]
pub async fn login_user_handler(
    current: MaybeAuthenticated,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> impl Responder {
    if let Some(user) = current.user() {
        info!(user_id = %user.user_id, "Login with live session, returning current token");
        return ApiResponse::success(LoginUserResponse {
            token: user.token.clone(),
        });
    }

    // Body is only read once there is no live session
    let dto: LoginRequestDto = match serde_json::from_slice(&body) {
        Ok(dto) => dto,
        Err(e) => {
            warn!(error = %e, "Login rejected: malformed body");
            return ApiResponse::bad_request(&e.to_string());
        }
    };
    info!(email = %dto.email, "Login attempt");

    let request = match LoginRequest::new(&dto.email, &dto.password) {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, "Login rejected: invalid input");
            return ApiResponse::invalid_field(e.field(), &e.to_string());
        }
    };

    match data.login_user_use_case.execute(request).await {
        Ok(response) => {
            info!(email = %dto.email, "User logged in successfully");
            ApiResponse::success(response)
        }

        Err(LoginError::InvalidCredentials) => {
            warn!(email = %dto.email, "Login failed: invalid credentials");
            ApiResponse::bad_credentials()
        }

        Err(LoginError::PasswordVerificationFailed(ref e)) => {
            error!(error = %e, "Password verification failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::TokenIssueFailed(ref e)) => {
            error!(error = %e, "Token issue failed");
            ApiResponse::internal_error()
        }

        Err(LoginError::QueryError(ref e)) => {
            error!(error = %e, "User lookup failed");
            ApiResponse::storage_error()
        }
    }
}
