use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub email: String,
    pub username: String,
    pub password_hash: String,
}

/// Confirmation payload returned by write operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserResult {
    pub id: UserId,
    pub email: String,
    pub username: String,
    pub active: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// New users start inactive until they confirm their email
    async fn create_user(&self, user: CreateUserData) -> Result<UserResult, UserRepositoryError>;

    async fn activate_user(&self, user_id: UserId) -> Result<UserResult, UserRepositoryError>;

    /// Replaces email and password hash and puts the account back to inactive
    async fn update_credentials(
        &self,
        user_id: UserId,
        email: String,
        password_hash: String,
    ) -> Result<UserResult, UserRepositoryError>;

    async fn record_login(&self, user_id: UserId) -> Result<(), UserRepositoryError>;
}
