use std::sync::Arc;

use tracing::{error, info};

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::services::AuthService;
use crate::auth::application::use_cases::create_user::{
    CreateUserError, CreateUserInput, CreateUserOutput, ICreateUserUseCase,
};
use crate::email::application::ports::outgoing::user_email_notifier::{
    EmailRecipient, UserEmailNotifier,
};

// ============================================================================
// Registration Output
// ============================================================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRegistrationOutput {
    pub user_id: UserId,
    pub email: String,
    pub username: String,
}

impl From<CreateUserOutput> for UserRegistrationOutput {
    fn from(output: CreateUserOutput) -> Self {
        Self {
            user_id: output.user_id,
            email: output.email,
            username: output.username,
        }
    }
}

// ============================================================================
// Registration Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum UserRegistrationError {
    #[error("User creation failed: {0}")]
    CreateUserFailed(#[from] CreateUserError),

    #[error("Token issue failed: {0}")]
    TokenIssueFailed(String),

    #[error("Email sending failed: {0}")]
    EmailSendingFailed(String),
}

// ============================================================================
// User Registration Service (Orchestration Layer)
// ============================================================================

#[derive(Clone)]
pub struct UserRegistrationOrchestrator {
    create_user_use_case: Arc<dyn ICreateUserUseCase>,
    auth: AuthService,
    email_service: Arc<dyn UserEmailNotifier>,
}

impl UserRegistrationOrchestrator {
    pub fn new(
        create_user_use_case: Arc<dyn ICreateUserUseCase>,
        auth: AuthService,
        email_service: Arc<dyn UserEmailNotifier>,
    ) -> Self {
        Self {
            create_user_use_case,
            auth,
            email_service,
        }
    }

    /// Orchestrates complete user registration:
    /// 1. Creates the inactive account
    /// 2. Issues a confirmation token
    /// 3. Mails the confirmation link
    ///
    /// The account stays in place when mailing fails; the caller only learns
    /// that the confirmation mail did not go out.
    pub async fn register_user(
        &self,
        input: CreateUserInput,
    ) -> Result<UserRegistrationOutput, UserRegistrationError> {
        let created_user = self.create_user_use_case.execute(input).await?;

        let token = self
            .auth
            .issue_confirmation(created_user.user_id)
            .await
            .map_err(|e| UserRegistrationError::TokenIssueFailed(e.to_string()))?;

        let recipient = EmailRecipient {
            email: created_user.email.clone(),
            username: created_user.username.clone(),
        };

        if let Err(e) = self
            .email_service
            .send_confirmation_email(&recipient, &token)
            .await
        {
            error!(user_id = %created_user.user_id, error = %e, "Confirmation mail not sent");
            return Err(UserRegistrationError::EmailSendingFailed(e.to_string()));
        }

        info!(user_id = %created_user.user_id, "User registered, confirmation mailed");
        Ok(created_user.into())
    }
}
