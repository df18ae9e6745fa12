pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::email;

use crate::auth::adapter::outgoing::{
    Argon2Hasher, RandomTokenGenerator, RedisTokenCache, UserQueryPostgres,
    UserRepositoryPostgres,
};
use crate::auth::application::orchestrator::user_registration::UserRegistrationOrchestrator;
use crate::auth::application::services::AuthService;
use crate::auth::application::use_cases::{
    change_account::{ChangeAccountUseCase, IChangeAccountUseCase},
    confirm_email::{ConfirmEmailUseCase, IConfirmEmailUseCase},
    create_user::CreateUserUseCase,
    login_user::{ILoginUserUseCase, LoginUserUseCase},
    logout_user::{ILogoutUseCase, LogoutUseCase},
    resolve_session::{IResolveSessionUseCase, ResolveSessionUseCase},
};
use crate::config::AppConfig;
use crate::email::adapter::outgoing::smtp_sender::SmtpEmailSender;
use crate::email::application::services::UserEmailService;
use crate::modules::blog::adapter::outgoing::{
    BlogQueryPostgres, BlogRepositoryPostgres, CommentRepositoryPostgres,
};
use crate::modules::blog::application::service::{
    CreateBlogService, CreateCommentService, DeleteBlogService, DeleteCommentService,
    GetBlogService, ListBlogsService, ListCommentsService, PatchBlogService,
};
use crate::modules::blog::application::BlogUseCases;
use crate::modules::user::adapter::outgoing::{
    FollowRepositoryPostgres, ProfileQueryPostgres, ProfileRepositoryPostgres,
};
use crate::modules::user::application::service::{
    GetMyInfoService, GetUserInfoService, PatchMyInfoService, ToggleFollowService,
};
use crate::modules::user::application::UserUseCases;
use crate::shared::api::{custom_json_config, custom_path_config, custom_query_config};

use actix_web::{web, App, HttpServer};
use deadpool_redis::{Config, Runtime};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub register_user_orchestrator: Arc<UserRegistrationOrchestrator>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub confirm_email_use_case: Arc<dyn IConfirmEmailUseCase + Send + Sync>,
    pub logout_user_use_case: Arc<dyn ILogoutUseCase + Send + Sync>,
    pub change_account_use_case: Arc<dyn IChangeAccountUseCase + Send + Sync>,
    pub resolve_session_use_case: Arc<dyn IResolveSessionUseCase + Send + Sync>,
    pub user: UserUseCases,
    pub blog: BlogUseCases,
}

fn startup_error(context: &str, e: impl std::fmt::Display) -> io::Error {
    io::Error::other(format!("{context}: {e}"))
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // TLS provider for redis and SMTP connections
    let _ = rustls::crypto::ring::default_provider().install_default();

    let config = AppConfig::load().map_err(|e| startup_error("Invalid configuration", e))?;
    info!(environment = %config.environment, "Starting application...");

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(50)
        .min_connections(5)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .map_err(|e| startup_error("Failed to connect to database", e))?;

    if config.run_migrations {
        Migrator::up(&conn, None)
            .await
            .map_err(|e| startup_error("Migration failed", e))?;
        info!("Migrations applied");
    }

    let db_arc = Arc::new(conn);

    // Redis connection
    let redis_pool = Config::from_url(&config.redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .map_err(|e| startup_error("Failed to create Redis pool", e))?;
    let redis_arc = Arc::new(redis_pool);

    // Mail
    let smtp_sender = SmtpEmailSender::from_config(&config.smtp, &config.email_from)
        .map_err(|e| startup_error("Invalid SMTP setup", e))?;
    let email_notifier = Arc::new(UserEmailService::new(
        Arc::new(smtp_sender),
        &config.app_url,
    ));

    // Auth components
    let user_query = Arc::new(UserQueryPostgres::new(Arc::clone(&db_arc)));
    let user_repo = Arc::new(UserRepositoryPostgres::new(Arc::clone(&db_arc)));
    let password_hasher = Arc::new(
        Argon2Hasher::from_config(&config.argon2)
            .map_err(|e| startup_error("Invalid Argon2 parameters", e))?,
    );

    let auth_service = AuthService::new(
        Arc::new(RedisTokenCache::new(Arc::clone(&redis_arc))),
        Arc::new(RandomTokenGenerator::new()),
        user_query.clone(),
        config.token_ttl_secs,
    );

    let create_user_use_case = CreateUserUseCase::new(
        user_query.clone(),
        user_repo.clone(),
        password_hasher.clone(),
    );
    let register_user_orchestrator = UserRegistrationOrchestrator::new(
        Arc::new(create_user_use_case),
        auth_service.clone(),
        email_notifier.clone(),
    );
    let login_user_use_case = LoginUserUseCase::new(
        user_query.clone(),
        user_repo.clone(),
        password_hasher.clone(),
        auth_service.clone(),
    );
    let confirm_email_use_case =
        ConfirmEmailUseCase::new(user_query.clone(), user_repo.clone(), auth_service.clone());
    let change_account_use_case = ChangeAccountUseCase::new(
        user_query,
        user_repo,
        password_hasher,
        auth_service.clone(),
        email_notifier,
    );
    let logout_user_use_case = LogoutUseCase::new(auth_service.clone());
    let resolve_session_use_case = ResolveSessionUseCase::new(auth_service);

    // User components
    let profile_query = ProfileQueryPostgres::new(Arc::clone(&db_arc));
    let profile_repo = ProfileRepositoryPostgres::new(Arc::clone(&db_arc));
    let follow_repo = FollowRepositoryPostgres::new(Arc::clone(&db_arc));

    let user = UserUseCases {
        get_info: Arc::new(GetUserInfoService::new(profile_query.clone())),
        get_my_info: Arc::new(GetMyInfoService::new(profile_query.clone())),
        patch_my_info: Arc::new(PatchMyInfoService::new(
            profile_repo,
            profile_query.clone(),
        )),
        toggle_follow: Arc::new(ToggleFollowService::new(follow_repo, profile_query.clone())),
    };

    // Blog components
    let blog_query = BlogQueryPostgres::new(Arc::clone(&db_arc));
    let blog_repo = BlogRepositoryPostgres::new(Arc::clone(&db_arc));
    let comment_repo = CommentRepositoryPostgres::new(Arc::clone(&db_arc));

    let blog = BlogUseCases {
        create: Arc::new(CreateBlogService::new(blog_repo.clone(), blog_query.clone())),
        get_single: Arc::new(GetBlogService::new(blog_query.clone())),
        get_list: Arc::new(ListBlogsService::new(blog_query.clone(), profile_query)),
        patch: Arc::new(PatchBlogService::new(blog_repo.clone(), blog_query.clone())),
        soft_delete: Arc::new(DeleteBlogService::new(blog_repo)),
        create_comment: Arc::new(CreateCommentService::new(
            comment_repo.clone(),
            blog_query.clone(),
        )),
        get_comments: Arc::new(ListCommentsService::new(blog_query)),
        soft_delete_comment: Arc::new(DeleteCommentService::new(comment_repo)),
    };

    let state = AppState {
        register_user_orchestrator: Arc::new(register_user_orchestrator),
        login_user_use_case: Arc::new(login_user_use_case),
        confirm_email_use_case: Arc::new(confirm_email_use_case),
        logout_user_use_case: Arc::new(logout_user_use_case),
        change_account_use_case: Arc::new(change_account_use_case),
        resolve_session_use_case: Arc::new(resolve_session_use_case),
        user,
        blog,
    };

    let server_url = config.server_url();
    info!(address = %server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(web::Data::new(Arc::clone(&redis_arc)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .app_data(custom_path_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::confirm_email_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::change_account_handler);
    // User: `/my/info` must win over `/{user_id}/info`
    cfg.service(crate::modules::user::adapter::incoming::web::routes::get_my_info_handler);
    cfg.service(crate::modules::user::adapter::incoming::web::routes::patch_my_info_handler);
    cfg.service(crate::modules::user::adapter::incoming::web::routes::get_user_info_handler);
    cfg.service(crate::modules::user::adapter::incoming::web::routes::toggle_follow_handler);
    // Blog
    cfg.service(crate::modules::blog::adapter::incoming::web::routes::create_blog_handler);
    cfg.service(crate::modules::blog::adapter::incoming::web::routes::get_blogs_handler);
    cfg.service(crate::modules::blog::adapter::incoming::web::routes::get_blog_handler);
    cfg.service(crate::modules::blog::adapter::incoming::web::routes::patch_blog_handler);
    cfg.service(crate::modules::blog::adapter::incoming::web::routes::delete_blog_handler);
    cfg.service(crate::modules::blog::adapter::incoming::web::routes::get_user_blogs_handler);
    // Comment
    cfg.service(crate::modules::blog::adapter::incoming::web::routes::create_comment_handler);
    cfg.service(crate::modules::blog::adapter::incoming::web::routes::get_comments_handler);
    cfg.service(crate::modules::blog::adapter::incoming::web::routes::delete_comment_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
