// application/ports/outgoing/user_query.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::auth::application::domain::entities::{SessionUser, UserId};

/// Everything the auth flows need to know about a stored user
#[derive(Debug, Clone)]
pub struct UserQueryResult {
    pub id: UserId,
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub active: bool,
    pub create_time: DateTime<Utc>,
    pub last_login_time: Option<DateTime<Utc>>,
}

impl From<UserQueryResult> for SessionUser {
    fn from(user: UserQueryResult) -> Self {
        SessionUser {
            id: user.id,
            email: user.email,
            username: user.username,
            active: user.active,
            last_login_time: user.last_login_time,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<UserQueryResult>, UserQueryError>;

    /// Case-insensitive match on the stored email
    async fn find_by_email(&self, email: &str) -> Result<Option<UserQueryResult>, UserQueryError>;
}
