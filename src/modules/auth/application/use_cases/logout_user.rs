use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::services::AuthService;

#[derive(Debug, Clone, thiserror::Error)]
pub enum LogoutError {
    #[error("Token revocation failed: {0}")]
    TokenRevocationFailed(String),
}

#[async_trait]
pub trait ILogoutUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<(), LogoutError>;
}

#[derive(Clone)]
pub struct LogoutUseCase {
    auth: AuthService,
}

impl LogoutUseCase {
    pub fn new(auth: AuthService) -> Self {
        Self { auth }
    }
}

#[async_trait]
impl ILogoutUseCase for LogoutUseCase {
    async fn execute(&self, user_id: UserId) -> Result<(), LogoutError> {
        self.auth
            .revoke(user_id)
            .await
            .map_err(|e| LogoutError::TokenRevocationFailed(e.to_string()))?;

        info!(user_id = %user_id, "User logged out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::auth_fakes::AuthFixture;

    #[tokio::test]
    async fn logout_revokes_session() {
        let fx = AuthFixture::new();
        let user_id = fx.users.seed("alice@example.com", "alice", "secret1", true);
        let token = fx.auth.issue_token(user_id).await.unwrap();

        LogoutUseCase::new(fx.auth.clone())
            .execute(user_id)
            .await
            .unwrap();

        assert!(fx.auth.resolve(&token).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn logout_without_session_is_ok() {
        let fx = AuthFixture::new();

        let result = LogoutUseCase::new(fx.auth.clone())
            .execute(UserId::from(5))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn logout_reports_cache_failure() {
        let fx = AuthFixture::new();
        fx.cache.set_unavailable(true);

        let result = LogoutUseCase::new(fx.auth.clone())
            .execute(UserId::from(5))
            .await;

        assert!(matches!(result, Err(LogoutError::TokenRevocationFailed(_))));
    }
}
