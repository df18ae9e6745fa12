use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::modules::user::application::ports::incoming::use_cases::{
    ToggleFollowError, ToggleFollowUseCase,
};
use crate::modules::user::application::ports::outgoing::{
    FollowOutcome, FollowRepository, ProfileQuery,
};

pub struct ToggleFollowService<F, Q>
where
    F: FollowRepository,
    Q: ProfileQuery,
{
    follows: F,
    query: Q,
}

impl<F, Q> ToggleFollowService<F, Q>
where
    F: FollowRepository,
    Q: ProfileQuery,
{
    pub fn new(follows: F, query: Q) -> Self {
        Self { follows, query }
    }
}

#[async_trait]
impl<F, Q> ToggleFollowUseCase for ToggleFollowService<F, Q>
where
    F: FollowRepository + Send + Sync,
    Q: ProfileQuery + Send + Sync,
{
    async fn execute(
        &self,
        current_user: UserId,
        target_user: UserId,
    ) -> Result<FollowOutcome, ToggleFollowError> {
        if current_user == target_user {
            return Err(ToggleFollowError::SelfFollow);
        }

        self.query
            .find_profile(target_user)
            .await
            .map_err(|e| ToggleFollowError::QueryError(e.to_string()))?
            .ok_or(ToggleFollowError::TargetNotFound)?;

        let outcome = self
            .follows
            .toggle(current_user, target_user)
            .await
            .map_err(|e| ToggleFollowError::TransactionFailed(e.to_string()))?;

        info!(
            follower = %current_user,
            followed = %target_user,
            outcome = ?outcome,
            "Follow toggled"
        );

        Ok(outcome)
    }
}
