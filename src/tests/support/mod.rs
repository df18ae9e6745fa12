pub mod app_state_builder;
pub mod auth_fakes;
pub mod blog_fakes;
pub mod stubs;
pub mod user_fakes;
