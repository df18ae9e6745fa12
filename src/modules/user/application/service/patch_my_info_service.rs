use async_trait::async_trait;

use crate::auth::application::domain::credentials::validate_username;
use crate::auth::application::domain::entities::UserId;
use crate::modules::user::application::ports::incoming::use_cases::{
    PatchMyInfoError, PatchMyInfoUseCase,
};
use crate::modules::user::application::ports::outgoing::{
    OwnProfileView, PatchProfileData, ProfileQuery, ProfileRepository, ProfileRepositoryError,
    MAX_GENDER,
};

pub struct PatchMyInfoService<R, Q>
where
    R: ProfileRepository,
    Q: ProfileQuery,
{
    repository: R,
    query: Q,
}

impl<R, Q> PatchMyInfoService<R, Q>
where
    R: ProfileRepository,
    Q: ProfileQuery,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

/// Trims the username and range-checks gender.
fn validate(data: PatchProfileData) -> Result<PatchProfileData, PatchMyInfoError> {
    if data.is_empty() {
        return Err(PatchMyInfoError::EmptyPatch);
    }

    let username = data
        .username
        .as_deref()
        .map(validate_username)
        .transpose()
        .map_err(|e| PatchMyInfoError::InvalidField {
            field: e.field(),
            message: e.to_string(),
        })?;

    if let Some(gender) = data.gender {
        if !(0..=MAX_GENDER).contains(&gender) {
            return Err(PatchMyInfoError::InvalidField {
                field: "gender",
                message: format!("Gender must be between 0 and {MAX_GENDER}"),
            });
        }
    }

    Ok(PatchProfileData {
        username,
        gender: data.gender,
    })
}

#[async_trait]
impl<R, Q> PatchMyInfoUseCase for PatchMyInfoService<R, Q>
where
    R: ProfileRepository + Send + Sync,
    Q: ProfileQuery + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        data: PatchProfileData,
    ) -> Result<OwnProfileView, PatchMyInfoError> {
        let data = validate(data)?;

        self.repository
            .patch_profile(user_id, data)
            .await
            .map_err(|e| match e {
                ProfileRepositoryError::NotFound => PatchMyInfoError::NotFound,
                ProfileRepositoryError::DatabaseError(msg) => PatchMyInfoError::RepositoryError(msg),
            })?;

        self.query
            .find_own_profile(user_id)
            .await
            .map_err(|e| PatchMyInfoError::RepositoryError(e.to_string()))?
            .ok_or(PatchMyInfoError::NotFound)
    }
}
