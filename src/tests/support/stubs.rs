//! Canned use cases for handler tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::auth::application::domain::entities::{SessionUser, UserId};
use crate::auth::application::orchestrator::user_registration::UserRegistrationOrchestrator;
use crate::auth::application::use_cases::change_account::{
    ChangeAccountError, ChangeAccountInput, ChangeAccountOutcome, IChangeAccountUseCase,
};
use crate::auth::application::use_cases::confirm_email::{
    ConfirmEmailError, ConfirmEmailResponse, IConfirmEmailUseCase,
};
use crate::auth::application::use_cases::create_user::{
    CreateUserError, CreateUserInput, CreateUserOutput, ICreateUserUseCase,
};
use crate::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoginError, LoginRequest, LoginUserResponse,
};
use crate::auth::application::use_cases::logout_user::{ILogoutUseCase, LogoutError};
use crate::auth::application::use_cases::resolve_session::{
    IResolveSessionUseCase, ResolveSessionError,
};
use crate::tests::support::auth_fakes::{AuthFixture, RecordingNotifier};

/// Well-formed token accepted by [`StubResolveSession::found`].
pub const VALID_TOKEN: &str = "AbCdEfGhIjKlMnOpQrSt";

pub fn session_user(id: i32) -> SessionUser {
    SessionUser {
        id: UserId::from(id),
        email: format!("user{id}@example.com"),
        username: format!("user{id}"),
        active: true,
        last_login_time: None,
    }
}

// ───────────────────────── Session ─────────────────────────

#[derive(Clone)]
pub struct StubResolveSession {
    result: Result<Option<SessionUser>, ResolveSessionError>,
}

impl StubResolveSession {
    /// Resolves [`VALID_TOKEN`] to `user`; any other token is unknown.
    pub fn found(user: SessionUser) -> Self {
        Self {
            result: Ok(Some(user)),
        }
    }

    pub fn none() -> Self {
        Self { result: Ok(None) }
    }

    pub fn failing() -> Self {
        Self {
            result: Err(ResolveSessionError::LookupFailed("redis down".to_string())),
        }
    }
}

#[async_trait]
impl IResolveSessionUseCase for StubResolveSession {
    async fn execute(&self, token: &str) -> Result<Option<SessionUser>, ResolveSessionError> {
        match &self.result {
            Ok(Some(user)) if token == VALID_TOKEN => Ok(Some(user.clone())),
            Ok(_) => Ok(None),
            Err(e) => Err(e.clone()),
        }
    }
}

// ───────────────────────── Login ─────────────────────────

#[derive(Clone)]
pub struct StubLoginUser {
    result: Result<LoginUserResponse, LoginError>,
    calls: Arc<AtomicUsize>,
}

impl StubLoginUser {
    pub fn token(token: &str) -> Self {
        Self {
            result: Ok(LoginUserResponse {
                token: token.to_string(),
            }),
            calls: Arc::default(),
        }
    }

    pub fn failing(error: LoginError) -> Self {
        Self {
            result: Err(error),
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ILoginUserUseCase for StubLoginUser {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

// ───────────────────────── Confirm ─────────────────────────

#[derive(Clone)]
pub struct StubConfirmEmail {
    result: Result<ConfirmEmailResponse, ConfirmEmailError>,
    last_authenticated: Arc<Mutex<Option<bool>>>,
}

impl StubConfirmEmail {
    /// Succeeds for anonymous callers, rejects authenticated ones.
    pub fn token(token: &str) -> Self {
        Self {
            result: Ok(ConfirmEmailResponse {
                token: token.to_string(),
            }),
            last_authenticated: Arc::default(),
        }
    }

    pub fn failing(error: ConfirmEmailError) -> Self {
        Self {
            result: Err(error),
            last_authenticated: Arc::default(),
        }
    }

    pub fn last_authenticated(&self) -> Option<bool> {
        *self.last_authenticated.lock().unwrap()
    }
}

#[async_trait]
impl IConfirmEmailUseCase for StubConfirmEmail {
    async fn execute(
        &self,
        _token: &str,
        already_authenticated: bool,
    ) -> Result<ConfirmEmailResponse, ConfirmEmailError> {
        *self.last_authenticated.lock().unwrap() = Some(already_authenticated);
        if already_authenticated {
            return Err(ConfirmEmailError::AlreadyAuthenticated);
        }
        self.result.clone()
    }
}

// ───────────────────────── Logout ─────────────────────────

#[derive(Clone, Default)]
pub struct StubLogout {
    fail: bool,
    revoked: Arc<Mutex<Vec<UserId>>>,
}

impl StubLogout {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn revoked(&self) -> Vec<UserId> {
        self.revoked.lock().unwrap().clone()
    }
}

#[async_trait]
impl ILogoutUseCase for StubLogout {
    async fn execute(&self, user_id: UserId) -> Result<(), LogoutError> {
        if self.fail {
            return Err(LogoutError::TokenRevocationFailed("redis down".to_string()));
        }
        self.revoked.lock().unwrap().push(user_id);
        Ok(())
    }
}

// ───────────────────────── Account ─────────────────────────

#[derive(Clone)]
pub struct StubChangeAccount {
    result: Result<ChangeAccountOutcome, ChangeAccountError>,
}

impl StubChangeAccount {
    pub fn ok(outcome: ChangeAccountOutcome) -> Self {
        Self {
            result: Ok(outcome),
        }
    }

    pub fn failing(error: ChangeAccountError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl IChangeAccountUseCase for StubChangeAccount {
    async fn execute(
        &self,
        _user_id: UserId,
        _input: ChangeAccountInput,
    ) -> Result<ChangeAccountOutcome, ChangeAccountError> {
        self.result.clone()
    }
}

// ───────────────────────── Registration ─────────────────────────

pub fn created_user(id: i32, email: &str) -> CreateUserOutput {
    CreateUserOutput {
        user_id: UserId::from(id),
        email: email.to_string(),
        username: format!("user{id}"),
    }
}

struct StubCreateUser {
    result: Result<CreateUserOutput, CreateUserError>,
}

#[async_trait]
impl ICreateUserUseCase for StubCreateUser {
    async fn execute(&self, _input: CreateUserInput) -> Result<CreateUserOutput, CreateUserError> {
        self.result.clone()
    }
}

/// Real orchestrator over a canned account creation, in-memory tokens and
/// the given mail recorder.
pub fn registration_orchestrator(
    created: Result<CreateUserOutput, CreateUserError>,
    notifier: Arc<RecordingNotifier>,
) -> Arc<UserRegistrationOrchestrator> {
    Arc::new(UserRegistrationOrchestrator::new(
        Arc::new(StubCreateUser { result: created }),
        AuthFixture::new().auth,
        notifier,
    ))
}
