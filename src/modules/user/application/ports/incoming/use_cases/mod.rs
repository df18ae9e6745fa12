mod get_my_info;
mod get_user_info;
mod patch_my_info;
mod toggle_follow;

pub use get_my_info::{GetMyInfoError, GetMyInfoUseCase};
pub use get_user_info::{GetUserInfoError, GetUserInfoUseCase};
pub use patch_my_info::{PatchMyInfoError, PatchMyInfoUseCase};
pub use toggle_follow::{ToggleFollowError, ToggleFollowUseCase};
