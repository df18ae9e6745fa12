use async_trait::async_trait;

use crate::auth::application::domain::entities::{TokenRecord, UserId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenCacheError {
    #[error("Token cache unavailable: {0}")]
    Unavailable(String),

    #[error("Corrupted token entry: {0}")]
    Corrupted(String),
}

/// TTL-bound storage for opaque tokens.
///
/// Every user has at most one live session token. Confirmation tokens live
/// next to it and never touch the session slot.
#[async_trait]
pub trait TokenCache: Send + Sync {
    /// Stores `record` as the user's session and drops the previous session
    /// token in the same atomic step.
    async fn store_session(&self, record: &TokenRecord, ttl_secs: u64)
        -> Result<(), TokenCacheError>;

    async fn store_confirmation(
        &self,
        record: &TokenRecord,
        ttl_secs: u64,
    ) -> Result<(), TokenCacheError>;

    /// `None` when the token never existed, expired or was removed.
    async fn find(&self, token: &str) -> Result<Option<TokenRecord>, TokenCacheError>;

    /// Removes the token. Only one concurrent caller gets `true`.
    async fn consume(&self, token: &str) -> Result<bool, TokenCacheError>;

    /// Removes the user's session token and the session slot. No-op when absent.
    async fn revoke_session(&self, user_id: UserId) -> Result<(), TokenCacheError>;
}
