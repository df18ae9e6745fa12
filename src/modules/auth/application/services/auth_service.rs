use std::sync::Arc;

use tracing::{debug, warn};

use crate::auth::application::domain::entities::{
    is_well_formed_token, token_fingerprint, SessionUser, TokenPurpose, TokenRecord, UserId,
};
use crate::auth::application::ports::outgoing::{
    TokenCache, TokenCacheError, TokenGenerator, UserQuery,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthServiceError {
    #[error("Token cache error: {0}")]
    Cache(#[from] TokenCacheError),

    #[error("User lookup failed: {0}")]
    UserLookup(String),
}

/// Issues, resolves and revokes opaque tokens.
///
/// Sessions are single-slot: issuing a session token for a user invalidates
/// whatever session token that user held before.
#[derive(Clone)]
pub struct AuthService {
    cache: Arc<dyn TokenCache>,
    generator: Arc<dyn TokenGenerator>,
    user_query: Arc<dyn UserQuery>,
    ttl_secs: u64,
}

impl AuthService {
    pub fn new(
        cache: Arc<dyn TokenCache>,
        generator: Arc<dyn TokenGenerator>,
        user_query: Arc<dyn UserQuery>,
        ttl_secs: u64,
    ) -> Self {
        Self {
            cache,
            generator,
            user_query,
            ttl_secs,
        }
    }

    pub async fn issue_token(&self, user_id: UserId) -> Result<String, AuthServiceError> {
        let record = TokenRecord::session(self.generator.generate(), user_id);
        self.cache.store_session(&record, self.ttl_secs).await?;

        debug!(user_id = %user_id, token = %token_fingerprint(&record.key), "Session token issued");
        Ok(record.key)
    }

    pub async fn issue_confirmation(&self, user_id: UserId) -> Result<String, AuthServiceError> {
        let record = TokenRecord::confirmation(self.generator.generate(), user_id);
        self.cache.store_confirmation(&record, self.ttl_secs).await?;

        debug!(user_id = %user_id, token = %token_fingerprint(&record.key), "Confirmation token issued");
        Ok(record.key)
    }

    /// Reads a token without consuming it.
    pub async fn peek(&self, token: &str) -> Result<Option<TokenRecord>, AuthServiceError> {
        if !is_well_formed_token(token) {
            return Ok(None);
        }
        Ok(self.cache.find(token).await?)
    }

    /// `true` for exactly one caller per token.
    pub async fn consume(&self, token: &str) -> Result<bool, AuthServiceError> {
        Ok(self.cache.consume(token).await?)
    }

    /// The user a session token belongs to, if the token is live.
    pub async fn resolve(&self, token: &str) -> Result<Option<SessionUser>, AuthServiceError> {
        let Some(record) = self.peek(token).await? else {
            return Ok(None);
        };

        if record.purpose != TokenPurpose::Session {
            debug!(token = %token_fingerprint(token), "Non-session token presented as bearer");
            return Ok(None);
        }

        let user = self
            .user_query
            .find_by_id(record.user_id)
            .await
            .map_err(|e| AuthServiceError::UserLookup(e.to_string()))?;

        if user.is_none() {
            warn!(user_id = %record.user_id, "Session token points to a missing user");
        }

        Ok(user.map(SessionUser::from))
    }

    pub async fn revoke(&self, user_id: UserId) -> Result<(), AuthServiceError> {
        self.cache.revoke_session(user_id).await?;
        debug!(user_id = %user_id, "Session revoked");
        Ok(())
    }
}
