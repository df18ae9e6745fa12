use async_trait::async_trait;

use crate::auth::application::domain::entities::SessionUser;
use crate::auth::application::services::AuthService;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResolveSessionError {
    #[error("Session lookup failed: {0}")]
    LookupFailed(String),
}

/// Bearer token to user, used by the request extractors.
#[async_trait]
pub trait IResolveSessionUseCase: Send + Sync {
    async fn execute(&self, token: &str) -> Result<Option<SessionUser>, ResolveSessionError>;
}

#[derive(Clone)]
pub struct ResolveSessionUseCase {
    auth: AuthService,
}

impl ResolveSessionUseCase {
    pub fn new(auth: AuthService) -> Self {
        Self { auth }
    }
}

#[async_trait]
impl IResolveSessionUseCase for ResolveSessionUseCase {
    async fn execute(&self, token: &str) -> Result<Option<SessionUser>, ResolveSessionError> {
        self.auth
            .resolve(token)
            .await
            .map_err(|e| ResolveSessionError::LookupFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::auth_fakes::{AuthFixture, SequenceTokenGenerator};

    #[tokio::test]
    async fn resolves_live_session() {
        let fx = AuthFixture::new();
        let user_id = fx.users.seed("alice@example.com", "alice", "secret1", true);
        let token = fx.auth.issue_token(user_id).await.unwrap();

        let user = ResolveSessionUseCase::new(fx.auth.clone())
            .execute(&token)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(user.id, user_id);
        assert_eq!(user.username, "alice");
    }

    #[tokio::test]
    async fn unknown_token_is_none() {
        let fx = AuthFixture::new();

        let user = ResolveSessionUseCase::new(fx.auth.clone())
            .execute(&SequenceTokenGenerator::token(3))
            .await
            .unwrap();

        assert!(user.is_none());
    }

    #[tokio::test]
    async fn cache_failure_is_error() {
        let fx = AuthFixture::new();
        fx.cache.set_unavailable(true);

        let result = ResolveSessionUseCase::new(fx.auth.clone())
            .execute(&SequenceTokenGenerator::token(3))
            .await;

        assert!(matches!(result, Err(ResolveSessionError::LookupFailed(_))));
    }
}
