mod get_my_info_service;
mod get_user_info_service;
mod patch_my_info_service;
mod toggle_follow_service;

pub use get_my_info_service::GetMyInfoService;
pub use get_user_info_service::GetUserInfoService;
pub use patch_my_info_service::PatchMyInfoService;
pub use toggle_follow_service::ToggleFollowService;
