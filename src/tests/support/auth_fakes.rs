//! In-memory stand-ins for the auth ports.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI32, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use crate::auth::application::domain::entities::{TokenRecord, UserId};
use crate::auth::application::ports::outgoing::{
    CreateUserData, HashError, PasswordHasher, TokenCache, TokenCacheError, TokenGenerator,
    UserQuery, UserQueryError, UserQueryResult, UserRepository, UserRepositoryError, UserResult,
};
use crate::auth::application::services::AuthService;
use crate::email::application::ports::outgoing::user_email_notifier::{
    EmailRecipient, UserEmailNotificationError, UserEmailNotifier,
};

pub const TEST_TTL_SECS: u64 = 3600;

// ───────────────────────── Token cache ─────────────────────────

#[derive(Default)]
pub struct InMemoryTokenCache {
    tokens: Mutex<HashMap<String, TokenRecord>>,
    sessions: Mutex<HashMap<UserId, String>>,
    unavailable: AtomicBool,
}

impl InMemoryTokenCache {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Simulates TTL expiry of a single token.
    pub fn expire(&self, token: &str) {
        self.tokens.lock().unwrap().remove(token);
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.lock().unwrap().contains_key(token)
    }

    pub fn session_of(&self, user_id: UserId) -> Option<String> {
        self.sessions.lock().unwrap().get(&user_id).cloned()
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), TokenCacheError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(TokenCacheError::Unavailable("cache down".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl TokenCache for InMemoryTokenCache {
    async fn store_session(
        &self,
        record: &TokenRecord,
        _ttl_secs: u64,
    ) -> Result<(), TokenCacheError> {
        self.check()?;
        let mut tokens = self.tokens.lock().unwrap();
        let mut sessions = self.sessions.lock().unwrap();

        if let Some(previous) = sessions.insert(record.user_id, record.key.clone()) {
            if previous != record.key {
                tokens.remove(&previous);
            }
        }
        tokens.insert(record.key.clone(), record.clone());
        Ok(())
    }

    async fn store_confirmation(
        &self,
        record: &TokenRecord,
        _ttl_secs: u64,
    ) -> Result<(), TokenCacheError> {
        self.check()?;
        self.tokens
            .lock()
            .unwrap()
            .insert(record.key.clone(), record.clone());
        Ok(())
    }

    async fn find(&self, token: &str) -> Result<Option<TokenRecord>, TokenCacheError> {
        self.check()?;
        Ok(self.tokens.lock().unwrap().get(token).cloned())
    }

    async fn consume(&self, token: &str) -> Result<bool, TokenCacheError> {
        self.check()?;
        Ok(self.tokens.lock().unwrap().remove(token).is_some())
    }

    async fn revoke_session(&self, user_id: UserId) -> Result<(), TokenCacheError> {
        self.check()?;
        let current = self.sessions.lock().unwrap().remove(&user_id);
        if let Some(current) = current {
            self.tokens.lock().unwrap().remove(&current);
        }
        Ok(())
    }
}

// ───────────────────────── Token generator ─────────────────────────

/// Yields `Tok00000000000000001`, `Tok00000000000000002`, ...
#[derive(Default)]
pub struct SequenceTokenGenerator {
    counter: AtomicUsize,
}

impl SequenceTokenGenerator {
    pub fn token(n: usize) -> String {
        format!("Tok{:0>17}", n)
    }
}

impl TokenGenerator for SequenceTokenGenerator {
    fn generate(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        Self::token(n)
    }
}

// ───────────────────────── Users ─────────────────────────

pub struct InMemoryUsers {
    users: Mutex<Vec<UserQueryResult>>,
    next_id: AtomicI32,
    fail_writes: AtomicBool,
}

impl Default for InMemoryUsers {
    fn default() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            next_id: AtomicI32::new(1),
            fail_writes: AtomicBool::new(false),
        }
    }
}

impl InMemoryUsers {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Seeds a user whose password was hashed by [`PlainTextHasher`].
    pub fn seed(&self, email: &str, username: &str, password: &str, active: bool) -> UserId {
        let id = UserId::from(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.users.lock().unwrap().push(UserQueryResult {
            id,
            email: email.to_string(),
            username: username.to_string(),
            password_hash: PlainTextHasher::hash(password),
            active,
            create_time: Utc::now(),
            last_login_time: None,
        });
        id
    }

    pub fn get(&self, id: UserId) -> Option<UserQueryResult> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned()
    }

    pub fn count(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check_writes(&self) -> Result<(), UserRepositoryError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(UserRepositoryError::DatabaseError("db down".to_string()));
        }
        Ok(())
    }

    fn update<F>(&self, id: UserId, apply: F) -> Result<UserResult, UserRepositoryError>
    where
        F: FnOnce(&mut UserQueryResult),
    {
        self.check_writes()?;
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(UserRepositoryError::UserNotFound)?;
        apply(user);
        Ok(UserResult {
            id: user.id,
            email: user.email.clone(),
            username: user.username.clone(),
            active: user.active,
        })
    }
}

#[async_trait]
impl UserQuery for InMemoryUsers {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<UserQueryResult>, UserQueryError> {
        Ok(self.get(user_id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserQueryResult>, UserQueryError> {
        let email = email.trim().to_lowercase();
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn create_user(&self, user: CreateUserData) -> Result<UserResult, UserRepositoryError> {
        self.check_writes()?;
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(UserRepositoryError::UserAlreadyExists);
        }

        let id = UserId::from(self.next_id.fetch_add(1, Ordering::SeqCst));
        users.push(UserQueryResult {
            id,
            email: user.email.clone(),
            username: user.username.clone(),
            password_hash: user.password_hash,
            active: false,
            create_time: Utc::now(),
            last_login_time: None,
        });

        Ok(UserResult {
            id,
            email: user.email,
            username: user.username,
            active: false,
        })
    }

    async fn activate_user(&self, user_id: UserId) -> Result<UserResult, UserRepositoryError> {
        self.update(user_id, |u| u.active = true)
    }

    async fn update_credentials(
        &self,
        user_id: UserId,
        email: String,
        password_hash: String,
    ) -> Result<UserResult, UserRepositoryError> {
        let taken = self
            .users
            .lock()
            .unwrap()
            .iter()
            .any(|u| u.email == email && u.id != user_id);
        if taken {
            return Err(UserRepositoryError::UserAlreadyExists);
        }

        self.update(user_id, |u| {
            u.email = email;
            u.password_hash = password_hash;
            u.active = false;
        })
    }

    async fn record_login(&self, user_id: UserId) -> Result<(), UserRepositoryError> {
        self.update(user_id, |u| u.last_login_time = Some(Utc::now()))
            .map(|_| ())
    }
}

// ───────────────────────── Hasher ─────────────────────────

/// Reversible "hash" so tests stay fast and deterministic.
#[derive(Default)]
pub struct PlainTextHasher {
    fail: bool,
}

impl PlainTextHasher {
    pub fn failing() -> Self {
        Self { fail: true }
    }

    pub fn hash(password: &str) -> String {
        format!("plain${password}")
    }
}

#[async_trait]
impl PasswordHasher for PlainTextHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        if self.fail {
            return Err(HashError::HashFailed);
        }
        Ok(Self::hash(password))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        if self.fail {
            return Err(HashError::VerifyFailed);
        }
        Ok(Self::hash(password) == hash)
    }
}

// ───────────────────────── Mail ─────────────────────────

#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<(String, String)>>,
    fail: AtomicBool,
}

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing() -> Arc<Self> {
        let notifier = Self::default();
        notifier.fail.store(true, Ordering::SeqCst);
        Arc::new(notifier)
    }

    /// `(email, token)` pairs in send order.
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserEmailNotifier for RecordingNotifier {
    async fn send_confirmation_email(
        &self,
        recipient: &EmailRecipient,
        token: &str,
    ) -> Result<(), UserEmailNotificationError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(UserEmailNotificationError::EmailSendingFailed(
                "SMTP down".to_string(),
            ));
        }
        self.sent
            .lock()
            .unwrap()
            .push((recipient.email.clone(), token.to_string()));
        Ok(())
    }
}

// ───────────────────────── Wiring ─────────────────────────

pub struct AuthFixture {
    pub cache: Arc<InMemoryTokenCache>,
    pub users: Arc<InMemoryUsers>,
    pub auth: AuthService,
}

impl AuthFixture {
    pub fn new() -> Self {
        let cache = InMemoryTokenCache::new();
        let users = InMemoryUsers::new();
        let auth = AuthService::new(
            cache.clone(),
            Arc::new(SequenceTokenGenerator::default()),
            users.clone(),
            TEST_TTL_SECS,
        );

        Self { cache, users, auth }
    }
}
