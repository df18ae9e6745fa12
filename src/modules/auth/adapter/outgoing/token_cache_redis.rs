use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use deadpool_redis::redis::{AsyncCommands, Script};
use deadpool_redis::Pool;

use crate::auth::application::domain::entities::{TokenPurpose, TokenRecord, UserId};
use crate::auth::application::ports::outgoing::token_cache::{TokenCache, TokenCacheError};

const TOKEN_PREFIX: &str = "auth:token:";
const SESSION_PREFIX: &str = "auth:session:";

/// Replaces the user's session pointer and the token it names in one step.
///
/// KEYS[1] new token hash, KEYS[2] session pointer.
/// ARGV: token, user id, purpose, ttl, token key prefix.
const STORE_SESSION_SCRIPT: &str = r#"
local previous = redis.call('GET', KEYS[2])
if previous and previous ~= ARGV[1] then
    redis.call('DEL', ARGV[5] .. previous)
end
redis.call('DEL', KEYS[1])
redis.call('HSET', KEYS[1], 'key', ARGV[1], 'id', ARGV[2], 'purpose', ARGV[3])
redis.call('EXPIRE', KEYS[1], ARGV[4])
redis.call('SET', KEYS[2], ARGV[1], 'EX', ARGV[4])
return 1
"#;

/// KEYS[1] session pointer. ARGV[1] token key prefix.
const REVOKE_SESSION_SCRIPT: &str = r#"
local current = redis.call('GET', KEYS[1])
if current then
    redis.call('DEL', ARGV[1] .. current)
end
redis.call('DEL', KEYS[1])
return 1
"#;

/// Redis-backed token cache.
///
/// ## Redis data model
///
/// ```text
/// auth:token:{token}      -> HASH { key, id, purpose }   (TTL)
/// auth:session:{user_id}  -> "{token}"                   (same TTL)
/// ```
///
/// The session pointer is what enforces one live session per user. Confirmation
/// tokens only get the hash entry.
#[derive(Clone)]
pub struct RedisTokenCache {
    pool: Arc<Pool>,
}

impl RedisTokenCache {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    fn token_key(token: &str) -> String {
        format!("{TOKEN_PREFIX}{token}")
    }

    fn session_key(user_id: UserId) -> String {
        format!("{SESSION_PREFIX}{user_id}")
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, TokenCacheError> {
        self.pool
            .get()
            .await
            .map_err(|e| TokenCacheError::Unavailable(format!("Pool error: {}", e)))
    }

    fn decode(token: &str, fields: HashMap<String, String>) -> Result<TokenRecord, TokenCacheError> {
        let user_id = fields
            .get("id")
            .and_then(|v| v.parse::<i32>().ok())
            .ok_or_else(|| TokenCacheError::Corrupted(format!("bad user id for {token}")))?;

        let purpose = fields
            .get("purpose")
            .and_then(|v| TokenPurpose::parse(v))
            .ok_or_else(|| TokenCacheError::Corrupted(format!("bad purpose for {token}")))?;

        let key = fields
            .get("key")
            .cloned()
            .unwrap_or_else(|| token.to_string());

        Ok(TokenRecord {
            key,
            user_id: UserId::from(user_id),
            purpose,
        })
    }
}

#[async_trait]
impl TokenCache for RedisTokenCache {
    async fn store_session(
        &self,
        record: &TokenRecord,
        ttl_secs: u64,
    ) -> Result<(), TokenCacheError> {
        let mut conn = self.get_conn().await?;

        Script::new(STORE_SESSION_SCRIPT)
            .key(Self::token_key(&record.key))
            .key(Self::session_key(record.user_id))
            .arg(&record.key)
            .arg(record.user_id.value())
            .arg(record.purpose.as_str())
            .arg(ttl_secs)
            .arg(TOKEN_PREFIX)
            .invoke_async::<i64>(&mut *conn)
            .await
            .map_err(|e| TokenCacheError::Unavailable(e.to_string()))?;

        Ok(())
    }

    async fn store_confirmation(
        &self,
        record: &TokenRecord,
        ttl_secs: u64,
    ) -> Result<(), TokenCacheError> {
        let token_key = Self::token_key(&record.key);
        let mut conn = self.get_conn().await?;

        deadpool_redis::redis::pipe()
            .atomic()
            .del(&token_key)
            .ignore()
            .hset_multiple(
                &token_key,
                &[
                    ("key", record.key.clone()),
                    ("id", record.user_id.value().to_string()),
                    ("purpose", record.purpose.as_str().to_string()),
                ],
            )
            .ignore()
            .expire(&token_key, ttl_secs as i64)
            .ignore()
            .query_async::<()>(&mut *conn)
            .await
            .map_err(|e| TokenCacheError::Unavailable(e.to_string()))?;

        Ok(())
    }

    async fn find(&self, token: &str) -> Result<Option<TokenRecord>, TokenCacheError> {
        let mut conn = self.get_conn().await?;

        let fields: HashMap<String, String> = conn
            .hgetall(Self::token_key(token))
            .await
            .map_err(|e| TokenCacheError::Unavailable(e.to_string()))?;

        if fields.is_empty() {
            return Ok(None);
        }

        Self::decode(token, fields).map(Some)
    }

    async fn consume(&self, token: &str) -> Result<bool, TokenCacheError> {
        let mut conn = self.get_conn().await?;

        let removed: i64 = conn
            .del(Self::token_key(token))
            .await
            .map_err(|e| TokenCacheError::Unavailable(e.to_string()))?;

        Ok(removed == 1)
    }

    async fn revoke_session(&self, user_id: UserId) -> Result<(), TokenCacheError> {
        let mut conn = self.get_conn().await?;

        Script::new(REVOKE_SESSION_SCRIPT)
            .key(Self::session_key(user_id))
            .arg(TOKEN_PREFIX)
            .invoke_async::<i64>(&mut *conn)
            .await
            .map_err(|e| TokenCacheError::Unavailable(e.to_string()))?;

        Ok(())
    }
}
