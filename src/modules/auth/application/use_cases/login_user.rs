use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::auth::application::domain::credentials::{normalize_email, CredentialError};
use crate::auth::application::ports::outgoing::{PasswordHasher, UserQuery, UserRepository};
use crate::auth::application::services::AuthService;

// ========================= Login Request =========================

/// Validated login request
#[derive(Debug, Clone)]
pub struct LoginRequest {
    email: String,
    password: String,
}

impl LoginRequest {
    pub fn new(email: &str, password: &str) -> Result<Self, CredentialError> {
        let email = normalize_email(email)?;

        if password.trim().is_empty() {
            return Err(CredentialError::EmptyPassword);
        }

        Ok(Self {
            email,
            password: password.to_string(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

/// Wire shape of `POST /login`
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginRequestDto {
    pub email: String,
    pub password: String,
}

// ====================== Login Error / Response =============================

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    /// Unknown email, wrong password or unconfirmed account
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token issue failed: {0}")]
    TokenIssueFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct LoginUserResponse {
    pub token: String,
}

// ============================ Login User Use Case =============================

#[async_trait]
pub trait ILoginUserUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError>;
}

#[derive(Clone)]
pub struct LoginUserUseCase {
    query: Arc<dyn UserQuery>,
    repository: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    auth: AuthService,
}

impl LoginUserUseCase {
    pub fn new(
        query: Arc<dyn UserQuery>,
        repository: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        auth: AuthService,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            auth,
        }
    }
}

#[async_trait]
impl ILoginUserUseCase for LoginUserUseCase {
    async fn execute(&self, request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        let user = self
            .query
            .find_by_email(request.email())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        let is_valid = self
            .password_hasher
            .verify_password(request.password(), &user.password_hash)
            .await
            .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string()))?;

        if !is_valid || !user.active {
            return Err(LoginError::InvalidCredentials);
        }

        let token = self
            .auth
            .issue_token(user.id)
            .await
            .map_err(|e| LoginError::TokenIssueFailed(e.to_string()))?;

        if let Err(e) = self.repository.record_login(user.id).await {
            warn!(user_id = %user.id, error = %e, "Could not record login time");
        }

        Ok(LoginUserResponse { token })
    }
}
