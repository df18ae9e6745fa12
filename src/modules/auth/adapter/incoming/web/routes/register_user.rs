use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::orchestrator::user_registration::UserRegistrationError;
use crate::auth::application::use_cases::create_user::{CreateUserError, CreateUserInput};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpResponse, Responder};
use tracing::{error, info, warn};

fn map_registration_error(err: UserRegistrationError, email: &str) -> HttpResponse {
    match err {
        UserRegistrationError::CreateUserFailed(CreateUserError::InvalidInput(e)) => {
            warn!(email = %email, error = %e, "Invalid registration input");
            ApiResponse::invalid_field(e.field(), &e.to_string())
        }
        UserRegistrationError::CreateUserFailed(CreateUserError::UserAlreadyExists) => {
            warn!(email = %email, "Email already registered");
            ApiResponse::invalid_field("email", "Email already registered")
        }
        UserRegistrationError::CreateUserFailed(CreateUserError::RepositoryError(e)) => {
            error!(email = %email, error = %e, "User insert failed");
            ApiResponse::storage_error()
        }
        UserRegistrationError::CreateUserFailed(CreateUserError::HashingFailed(e)) => {
            error!(error = %e, "Password hashing failed");
            ApiResponse::internal_error()
        }
        UserRegistrationError::TokenIssueFailed(e) => {
            error!(email = %email, error = %e, "Confirmation token not issued");
            ApiResponse::internal_error()
        }
        UserRegistrationError::EmailSendingFailed(e) => {
            error!(email = %email, error = %e, "Confirmation mail not sent");
            ApiResponse::internal_error()
        }
    }
}

/// Register a new user
///
/// Creates an inactive account and mails a confirmation link. The account
/// can log in once the link has been followed.
#[utoipa::path(
    post,
    path = "/register",
    tag = "auth",
    request_body = CreateUserInput,
    responses(
        (
            status = 200,
            description = "User created, confirmation mail sent",
            body = inline(SuccessResponse<String>),
            example = json!({ "code": 0, "message": "success", "result": "Success" })
        ),
        (
            status = 400,
            description = "Validation error or email already registered",
            body = ErrorResponse,
            example = json!({
                "code": 1002,
                "message": "invalid request parameters",
                "result": { "email": ["Email already registered"] }
            })
        ),
        (
            status = 500,
            description = "Storage, token or mail failure",
            body = ErrorResponse
        ),
    )
)]
#[post("/register")]
pub async fn register_user_handler(
    req: web::Json<CreateUserInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    let input = req.into_inner();
    let email = input.email.clone();

    info!(email = %email, username = %input.username, "Registration attempt");

    match data.register_user_orchestrator.register_user(input).await {
        Ok(output) => {
            info!(user_id = %output.user_id, email = %output.email, "User registered");
            ApiResponse::success("Success")
        }
        Err(e) => map_registration_error(e, &email),
    }
}
