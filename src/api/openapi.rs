use crate::api::schemas::ErrorResponse;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::auth::adapter::incoming::web::routes::{
    __path_change_account_handler, __path_confirm_email_handler, __path_login_user_handler,
    __path_logout_user_handler, __path_register_user_handler,
};
use crate::auth::application::use_cases::change_account::ChangeAccountInput;
use crate::auth::application::use_cases::confirm_email::ConfirmEmailResponse;
use crate::auth::application::use_cases::create_user::CreateUserInput;
use crate::auth::application::use_cases::login_user::{LoginRequestDto, LoginUserResponse};

// User
use crate::modules::user::adapter::incoming::web::routes::{
    __path_get_my_info_handler, __path_get_user_info_handler, __path_patch_my_info_handler,
    __path_toggle_follow_handler,
};
use crate::modules::user::application::ports::outgoing::{
    AuthorSummary, FollowOutcome, OwnProfileView, PatchProfileData, ProfileView,
};

// Blog
use crate::modules::blog::adapter::incoming::web::routes::{
    __path_create_blog_handler, __path_create_comment_handler, __path_delete_blog_handler,
    __path_delete_comment_handler, __path_get_blog_handler, __path_get_blogs_handler,
    __path_get_comments_handler, __path_get_user_blogs_handler, __path_patch_blog_handler,
};
use crate::modules::blog::application::ports::outgoing::{
    BlogView, CommentView, CreateBlogData, CreateCommentData, PatchBlogData,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Blog Backend API",
        version = "1.0.0",
        description = "Accounts, profiles, follows, blogs and comments. Every body is wrapped in `{code, message, result}`."
    ),
    paths(
        // Auth endpoints
        register_user_handler,
        confirm_email_handler,
        login_user_handler,
        logout_user_handler,
        change_account_handler,

        // User endpoints
        get_user_info_handler,
        get_my_info_handler,
        patch_my_info_handler,
        toggle_follow_handler,

        // Blog endpoints
        create_blog_handler,
        get_blog_handler,
        get_blogs_handler,
        get_user_blogs_handler,
        patch_blog_handler,
        delete_blog_handler,

        // Comment endpoints
        create_comment_handler,
        get_comments_handler,
        delete_comment_handler,
    ),
    components(
        schemas(
            ErrorResponse,

            // Auth DTOs
            CreateUserInput,
            LoginRequestDto,
            LoginUserResponse,
            ConfirmEmailResponse,
            ChangeAccountInput,

            // User DTOs
            ProfileView,
            OwnProfileView,
            AuthorSummary,
            PatchProfileData,
            FollowOutcome,

            // Blog DTOs
            BlogView,
            CommentView,
            CreateBlogData,
            PatchBlogData,
            CreateCommentData,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration, confirmation and sessions"),
        (name = "user", description = "Profiles and follows"),
        (name = "blog", description = "Blog posts"),
        (name = "comment", description = "Comments on blog posts"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "token",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                    "Authorization",
                    "Enter `TOKEN <token>` as returned by /login",
                ))),
            )
        }
    }
}
