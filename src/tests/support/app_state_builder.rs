use std::sync::Arc;

use actix_web::web;

use crate::auth::application::orchestrator::user_registration::UserRegistrationOrchestrator;
use crate::auth::application::use_cases::{
    change_account::{ChangeAccountOutcome, IChangeAccountUseCase},
    confirm_email::IConfirmEmailUseCase,
    login_user::ILoginUserUseCase, logout_user::ILogoutUseCase,
    resolve_session::IResolveSessionUseCase,
};
use crate::modules::blog::application::BlogUseCases;
use crate::modules::user::application::UserUseCases;
use crate::tests::support::auth_fakes::RecordingNotifier;
use crate::tests::support::blog_fakes::{blog_use_cases, InMemoryBlogs};
use crate::tests::support::stubs::*;
use crate::tests::support::user_fakes::{user_use_cases, InMemoryProfiles};
use crate::AppState;

/// Every slot starts with a harmless default; tests replace what they exercise.
pub struct TestAppStateBuilder {
    register_user: Arc<UserRegistrationOrchestrator>,
    login_user: Arc<dyn ILoginUserUseCase + Send + Sync>,
    confirm_email: Arc<dyn IConfirmEmailUseCase + Send + Sync>,
    logout_user: Arc<dyn ILogoutUseCase + Send + Sync>,
    change_account: Arc<dyn IChangeAccountUseCase + Send + Sync>,
    resolve_session: Arc<dyn IResolveSessionUseCase + Send + Sync>,
    user: UserUseCases,
    blog: BlogUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_user: registration_orchestrator(
                Ok(created_user(1, "user1@example.com")),
                RecordingNotifier::new(),
            ),
            login_user: Arc::new(StubLoginUser::token(VALID_TOKEN)),
            confirm_email: Arc::new(StubConfirmEmail::token(VALID_TOKEN)),
            logout_user: Arc::new(StubLogout::ok()),
            change_account: Arc::new(StubChangeAccount::ok(ChangeAccountOutcome::NotChanged)),
            resolve_session: Arc::new(StubResolveSession::none()),
            user: user_use_cases(InMemoryProfiles::default()),
            blog: blog_use_cases(InMemoryBlogs::default()),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_registration(mut self, orchestrator: Arc<UserRegistrationOrchestrator>) -> Self {
        self.register_user = orchestrator;
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login_user = Arc::new(uc);
        self
    }

    pub fn with_confirm_email(
        mut self,
        uc: impl IConfirmEmailUseCase + Send + Sync + 'static,
    ) -> Self {
        self.confirm_email = Arc::new(uc);
        self
    }

    pub fn with_logout(mut self, uc: impl ILogoutUseCase + Send + Sync + 'static) -> Self {
        self.logout_user = Arc::new(uc);
        self
    }

    pub fn with_change_account(
        mut self,
        uc: impl IChangeAccountUseCase + Send + Sync + 'static,
    ) -> Self {
        self.change_account = Arc::new(uc);
        self
    }

    pub fn with_resolve_session(
        mut self,
        uc: impl IResolveSessionUseCase + Send + Sync + 'static,
    ) -> Self {
        self.resolve_session = Arc::new(uc);
        self
    }

    pub fn with_user(mut self, user: UserUseCases) -> Self {
        self.user = user;
        self
    }

    pub fn with_blog(mut self, blog: BlogUseCases) -> Self {
        self.blog = blog;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            register_user_orchestrator: self.register_user,
            login_user_use_case: self.login_user,
            confirm_email_use_case: self.confirm_email,
            logout_user_use_case: self.logout_user,
            change_account_use_case: self.change_account,
            resolve_session_use_case: self.resolve_session,
            user: self.user,
            blog: self.blog,
        })
    }
}
