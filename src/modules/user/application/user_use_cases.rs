use std::sync::Arc;

use crate::modules::user::application::ports::incoming::use_cases::{
    GetMyInfoUseCase, GetUserInfoUseCase, PatchMyInfoUseCase, ToggleFollowUseCase,
};

#[derive(Clone)]
pub struct UserUseCases {
    pub get_info: Arc<dyn GetUserInfoUseCase + Send + Sync>,
    pub get_my_info: Arc<dyn GetMyInfoUseCase + Send + Sync>,
    pub patch_my_info: Arc<dyn PatchMyInfoUseCase + Send + Sync>,
    pub toggle_follow: Arc<dyn ToggleFollowUseCase + Send + Sync>,
}
