mod get_my_info;
mod get_user_info;
mod patch_my_info;
mod toggle_follow;

pub use get_my_info::{__path_get_my_info_handler, get_my_info_handler};
pub use get_user_info::{__path_get_user_info_handler, get_user_info_handler};
pub use patch_my_info::{__path_patch_my_info_handler, patch_my_info_handler};
pub use toggle_follow::{__path_toggle_follow_handler, toggle_follow_handler};
