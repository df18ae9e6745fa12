use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::user::application::ports::outgoing::FollowOutcome;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ToggleFollowError {
    #[error("Users cannot follow themselves")]
    SelfFollow,

    #[error("Target user not found")]
    TargetNotFound,

    #[error("Follow transaction failed: {0}")]
    TransactionFailed(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait ToggleFollowUseCase: Send + Sync {
    async fn execute(
        &self,
        current_user: UserId,
        target_user: UserId,
    ) -> Result<FollowOutcome, ToggleFollowError>;
}
