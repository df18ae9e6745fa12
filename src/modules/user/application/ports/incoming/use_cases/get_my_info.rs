use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::user::application::ports::outgoing::OwnProfileView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetMyInfoError {
    /// The session outlived its user row
    #[error("User not found")]
    NotFound,

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait GetMyInfoUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<OwnProfileView, GetMyInfoError>;
}
