use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::user::application::ports::outgoing::{OwnProfileView, PatchProfileData};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatchMyInfoError {
    #[error("{field}: {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },

    #[error("No fields to update")]
    EmptyPatch,

    #[error("User not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait PatchMyInfoUseCase: Send + Sync {
    /// Returns the profile as stored after the patch.
    async fn execute(
        &self,
        user_id: UserId,
        data: PatchProfileData,
    ) -> Result<OwnProfileView, PatchMyInfoError>;
}
