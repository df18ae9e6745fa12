// src/modules/user/application/ports/outgoing/follow_repository.rs

use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum FollowOutcome {
    Followed,
    Unfollowed,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum FollowRepositoryError {
    /// A write touched no row; the transaction was rolled back.
    #[error("Follow write affected no rows: {0}")]
    NoRowsAffected(&'static str),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Flips the `follower -> followed` edge and moves both counters by one,
    /// all in a single transaction.
    async fn toggle(
        &self,
        follower: UserId,
        followed: UserId,
    ) -> Result<FollowOutcome, FollowRepositoryError>;
}
