use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::auth::application::domain::credentials::{
    normalize_email, validate_new_password, validate_username, CredentialError,
};
use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{
    CreateUserData, PasswordHasher, UserQuery, UserRepository, UserRepositoryError,
};

// ========================= Input / Output =========================

/// Raw registration payload; validated by the use case.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateUserInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserOutput {
    pub user_id: UserId,
    pub email: String,
    pub username: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateUserError {
    #[error("{0}")]
    InvalidInput(#[from] CredentialError),

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

// ========================= Use Case =========================

#[async_trait]
pub trait ICreateUserUseCase: Send + Sync {
    async fn execute(&self, input: CreateUserInput) -> Result<CreateUserOutput, CreateUserError>;
}

#[derive(Clone)]
pub struct CreateUserUseCase {
    query: Arc<dyn UserQuery>,
    repository: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl CreateUserUseCase {
    pub fn new(
        query: Arc<dyn UserQuery>,
        repository: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl ICreateUserUseCase for CreateUserUseCase {
    async fn execute(&self, input: CreateUserInput) -> Result<CreateUserOutput, CreateUserError> {
        let email = normalize_email(&input.email)?;
        let password = validate_new_password(&input.password)?;
        let username = validate_username(&input.username)?;

        let existing = self
            .query
            .find_by_email(&email)
            .await
            .map_err(|e| CreateUserError::RepositoryError(e.to_string()))?;
        if existing.is_some() {
            return Err(CreateUserError::UserAlreadyExists);
        }

        let password_hash = self
            .password_hasher
            .hash_password(&password)
            .await
            .map_err(|e| CreateUserError::HashingFailed(e.to_string()))?;

        // The unique index still decides a race between two registrations
        let created = self
            .repository
            .create_user(CreateUserData {
                email,
                username,
                password_hash,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserAlreadyExists => CreateUserError::UserAlreadyExists,
                other => CreateUserError::RepositoryError(other.to_string()),
            })?;

        Ok(CreateUserOutput {
            user_id: created.id,
            email: created.email,
            username: created.username,
        })
    }
}
