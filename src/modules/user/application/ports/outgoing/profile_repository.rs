// src/modules/user/application/ports/outgoing/profile_repository.rs

use async_trait::async_trait;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::auth::application::domain::entities::UserId;

pub const MAX_GENDER: i16 = 2;

/// Fields a user may change on their own profile. Anything else in the
/// request body is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct PatchProfileData {
    #[schema(example = "loyo")]
    pub username: Option<String>,
    /// 0 unknown, 1 male, 2 female
    #[schema(example = 1)]
    pub gender: Option<i16>,
}

impl PatchProfileData {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.gender.is_none()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileRepositoryError {
    #[error("User not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Applies only the fields that are set.
    async fn patch_profile(
        &self,
        user_id: UserId,
        data: PatchProfileData,
    ) -> Result<(), ProfileRepositoryError>;
}
