mod change_account;
mod confirm_email;
mod login_user;
mod logout_user;
mod register_user;

pub use change_account::{__path_change_account_handler, change_account_handler};
pub use confirm_email::{__path_confirm_email_handler, confirm_email_handler};
pub use login_user::{__path_login_user_handler, login_user_handler};
pub use logout_user::{__path_logout_user_handler, logout_user_handler};
pub use register_user::{__path_register_user_handler, register_user_handler};
