use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;
use utoipa::ToSchema;

use crate::auth::application::domain::credentials::{
    normalize_email, validate_new_password, CredentialError,
};
use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{
    PasswordHasher, UserQuery, UserRepository, UserRepositoryError,
};
use crate::auth::application::services::AuthService;
use crate::email::application::ports::outgoing::user_email_notifier::{
    EmailRecipient, UserEmailNotifier,
};

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ChangeAccountInput {
    pub email: String,
    pub password: String,
    /// Only used to greet the user in the confirmation mail
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeAccountOutcome {
    NotChanged,
    Changed,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ChangeAccountError {
    #[error("{0}")]
    InvalidInput(#[from] CredentialError),

    #[error("Email already in use")]
    EmailTaken,

    #[error("User not found")]
    UserNotFound,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Token cache error: {0}")]
    CacheError(String),

    #[error("Email sending failed: {0}")]
    EmailFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait IChangeAccountUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        input: ChangeAccountInput,
    ) -> Result<ChangeAccountOutcome, ChangeAccountError>;
}

/// Replaces email and password, then sends the account back through email
/// confirmation.
#[derive(Clone)]
pub struct ChangeAccountUseCase {
    query: Arc<dyn UserQuery>,
    repository: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    auth: AuthService,
    notifier: Arc<dyn UserEmailNotifier>,
}

impl ChangeAccountUseCase {
    pub fn new(
        query: Arc<dyn UserQuery>,
        repository: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        auth: AuthService,
        notifier: Arc<dyn UserEmailNotifier>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            auth,
            notifier,
        }
    }
}

#[async_trait]
impl IChangeAccountUseCase for ChangeAccountUseCase {
    async fn execute(
        &self,
        user_id: UserId,
        input: ChangeAccountInput,
    ) -> Result<ChangeAccountOutcome, ChangeAccountError> {
        let email = normalize_email(&input.email)?;
        let password = validate_new_password(&input.password)?;

        let user = self
            .query
            .find_by_id(user_id)
            .await
            .map_err(|e| ChangeAccountError::RepositoryError(e.to_string()))?
            .ok_or(ChangeAccountError::UserNotFound)?;

        if email == user.email {
            let same_password = self
                .password_hasher
                .verify_password(&password, &user.password_hash)
                .await
                .map_err(|e| ChangeAccountError::HashingFailed(e.to_string()))?;
            if same_password {
                return Ok(ChangeAccountOutcome::NotChanged);
            }
        } else {
            let owner = self
                .query
                .find_by_email(&email)
                .await
                .map_err(|e| ChangeAccountError::RepositoryError(e.to_string()))?;
            if owner.is_some() {
                return Err(ChangeAccountError::EmailTaken);
            }
        }

        let password_hash = self
            .password_hasher
            .hash_password(&password)
            .await
            .map_err(|e| ChangeAccountError::HashingFailed(e.to_string()))?;

        let updated = self
            .repository
            .update_credentials(user_id, email, password_hash)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserAlreadyExists => ChangeAccountError::EmailTaken,
                UserRepositoryError::UserNotFound => ChangeAccountError::UserNotFound,
                other => ChangeAccountError::RepositoryError(other.to_string()),
            })?;

        self.auth
            .revoke(user_id)
            .await
            .map_err(|e| ChangeAccountError::CacheError(e.to_string()))?;

        let token = self
            .auth
            .issue_confirmation(user_id)
            .await
            .map_err(|e| ChangeAccountError::CacheError(e.to_string()))?;

        let recipient = EmailRecipient {
            email: updated.email,
            username: input
                .username
                .filter(|name| !name.trim().is_empty())
                .unwrap_or(updated.username),
        };
        self.notifier
            .send_confirmation_email(&recipient, &token)
            .await
            .map_err(|e| ChangeAccountError::EmailFailed(e.to_string()))?;

        info!(user_id = %user_id, "Account credentials changed, confirmation pending");
        Ok(ChangeAccountOutcome::Changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::auth_fakes::{AuthFixture, PlainTextHasher, RecordingNotifier};

    fn use_case(fx: &AuthFixture, notifier: Arc<RecordingNotifier>) -> ChangeAccountUseCase {
        ChangeAccountUseCase::new(
            fx.users.clone(),
            fx.users.clone(),
            Arc::new(PlainTextHasher::default()),
            fx.auth.clone(),
            notifier,
        )
    }

    fn input(email: &str, password: &str) -> ChangeAccountInput {
        ChangeAccountInput {
            email: email.to_string(),
            password: password.to_string(),
            username: None,
        }
    }

    #[tokio::test]
    async fn unchanged_credentials_are_a_no_op() {
        let fx = AuthFixture::new();
        let user_id = fx.users.seed("alice@example.com", "alice", "secret1", true);
        let token = fx.auth.issue_token(user_id).await.unwrap();
        let notifier = RecordingNotifier::new();

        let outcome = use_case(&fx, notifier.clone())
            .execute(user_id, input("Alice@example.com", "secret1"))
            .await
            .unwrap();

        assert_eq!(outcome, ChangeAccountOutcome::NotChanged);
        assert!(fx.auth.resolve(&token).await.unwrap().is_some());
        assert!(notifier.sent().is_empty());
    }

    #[tokio::test]
    async fn new_email_deactivates_revokes_and_mails() {
        let fx = AuthFixture::new();
        let user_id = fx.users.seed("alice@example.com", "alice", "secret1", true);
        let token = fx.auth.issue_token(user_id).await.unwrap();
        let notifier = RecordingNotifier::new();

        let outcome = use_case(&fx, notifier.clone())
            .execute(user_id, input("alice@new.example.com", "secret2"))
            .await
            .unwrap();

        assert_eq!(outcome, ChangeAccountOutcome::Changed);

        let stored = fx.users.get(user_id).unwrap();
        assert_eq!(stored.email, "alice@new.example.com");
        assert_eq!(stored.password_hash, PlainTextHasher::hash("secret2"));
        assert!(!stored.active);

        assert!(fx.auth.resolve(&token).await.unwrap().is_none());

        let sent = notifier.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "alice@new.example.com");
        assert!(fx.cache.contains(&sent[0].1));
    }

    #[tokio::test]
    async fn password_only_change_is_applied() {
        let fx = AuthFixture::new();
        let user_id = fx.users.seed("alice@example.com", "alice", "secret1", true);

        let outcome = use_case(&fx, RecordingNotifier::new())
            .execute(user_id, input("alice@example.com", "secret2"))
            .await
            .unwrap();

        assert_eq!(outcome, ChangeAccountOutcome::Changed);
        assert!(!fx.users.get(user_id).unwrap().active);
    }

    #[tokio::test]
    async fn email_of_another_user_is_rejected() {
        let fx = AuthFixture::new();
        let user_id = fx.users.seed("alice@example.com", "alice", "secret1", true);
        fx.users.seed("bob@example.com", "bob", "secret2", true);

        let result = use_case(&fx, RecordingNotifier::new())
            .execute(user_id, input("bob@example.com", "secret3"))
            .await;

        assert!(matches!(result, Err(ChangeAccountError::EmailTaken)));
        assert!(fx.users.get(user_id).unwrap().active);
    }

    #[tokio::test]
    async fn invalid_input_is_rejected() {
        let fx = AuthFixture::new();
        let user_id = fx.users.seed("alice@example.com", "alice", "secret1", true);

        let result = use_case(&fx, RecordingNotifier::new())
            .execute(user_id, input("alice@example.com", "abc"))
            .await;

        assert!(matches!(
            result,
            Err(ChangeAccountError::InvalidInput(CredentialError::PasswordTooShort))
        ));
    }

    #[tokio::test]
    async fn mail_failure_is_reported() {
        let fx = AuthFixture::new();
        let user_id = fx.users.seed("alice@example.com", "alice", "secret1", true);

        let result = use_case(&fx, RecordingNotifier::failing())
            .execute(user_id, input("alice@new.example.com", "secret2"))
            .await;

        assert!(matches!(result, Err(ChangeAccountError::EmailFailed(_))));
    }
}
