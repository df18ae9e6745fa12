pub mod change_account;
pub mod confirm_email;
pub mod create_user;
pub mod login_user;
pub mod logout_user;
pub mod resolve_session;
