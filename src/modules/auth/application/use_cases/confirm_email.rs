use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;

use crate::auth::application::domain::entities::{token_fingerprint, TokenPurpose, UserId};
use crate::auth::application::ports::outgoing::{UserQuery, UserRepository};
use crate::auth::application::services::AuthService;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfirmEmailError {
    #[error("Invalid or expired token")]
    InvalidOrExpiredToken,

    #[error("Account already confirmed")]
    AlreadyConfirmed,

    #[error("Already authenticated")]
    AlreadyAuthenticated,

    #[error("Token cache error: {0}")]
    CacheError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ConfirmEmailResponse {
    /// Fresh session token for the confirmed account
    pub token: String,
}

#[async_trait]
pub trait IConfirmEmailUseCase: Send + Sync {
    async fn execute(
        &self,
        token: &str,
        already_authenticated: bool,
    ) -> Result<ConfirmEmailResponse, ConfirmEmailError>;
}

#[derive(Clone)]
pub struct ConfirmEmailUseCase {
    query: Arc<dyn UserQuery>,
    repository: Arc<dyn UserRepository>,
    auth: AuthService,
}

impl ConfirmEmailUseCase {
    pub fn new(
        query: Arc<dyn UserQuery>,
        repository: Arc<dyn UserRepository>,
        auth: AuthService,
    ) -> Self {
        Self {
            query,
            repository,
            auth,
        }
    }

    async fn is_active(&self, user_id: UserId) -> Result<Option<bool>, ConfirmEmailError> {
        let user = self
            .query
            .find_by_id(user_id)
            .await
            .map_err(|e| ConfirmEmailError::RepositoryError(e.to_string()))?;
        Ok(user.map(|u| u.active))
    }
}

#[async_trait]
impl IConfirmEmailUseCase for ConfirmEmailUseCase {
    async fn execute(
        &self,
        token: &str,
        already_authenticated: bool,
    ) -> Result<ConfirmEmailResponse, ConfirmEmailError> {
        if already_authenticated {
            return Err(ConfirmEmailError::AlreadyAuthenticated);
        }

        let record = self
            .auth
            .peek(token)
            .await
            .map_err(|e| ConfirmEmailError::CacheError(e.to_string()))?
            .ok_or(ConfirmEmailError::InvalidOrExpiredToken)?;

        let active = self.is_active(record.user_id).await?;

        match (record.purpose, active) {
            (_, None) => return Err(ConfirmEmailError::InvalidOrExpiredToken),
            (_, Some(true)) => return Err(ConfirmEmailError::AlreadyConfirmed),
            (TokenPurpose::Session, Some(false)) => {
                return Err(ConfirmEmailError::InvalidOrExpiredToken)
            }
            (TokenPurpose::Confirm, Some(false)) => {}
        }

        // Consume only after activation has been stored
        self.repository
            .activate_user(record.user_id)
            .await
            .map_err(|e| ConfirmEmailError::RepositoryError(e.to_string()))?;

        // Losers of a concurrent confirm see the token as gone
        let consumed = self
            .auth
            .consume(token)
            .await
            .map_err(|e| ConfirmEmailError::CacheError(e.to_string()))?;
        if !consumed {
            return Err(ConfirmEmailError::InvalidOrExpiredToken);
        }

        let session = self
            .auth
            .issue_token(record.user_id)
            .await
            .map_err(|e| ConfirmEmailError::CacheError(e.to_string()))?;

        info!(
            user_id = %record.user_id,
            token = %token_fingerprint(token),
            "Account confirmed"
        );

        Ok(ConfirmEmailResponse { token: session })
    }
}
