use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::user::application::ports::incoming::use_cases::{
    GetUserInfoError, GetUserInfoUseCase,
};
use crate::modules::user::application::ports::outgoing::{ProfileQuery, ProfileView};

pub struct GetUserInfoService<Q>
where
    Q: ProfileQuery,
{
    query: Q,
}

impl<Q> GetUserInfoService<Q>
where
    Q: ProfileQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetUserInfoUseCase for GetUserInfoService<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<ProfileView, GetUserInfoError> {
        self.query
            .find_profile(user_id)
            .await
            .map_err(|e| GetUserInfoError::QueryError(e.to_string()))?
            .ok_or(GetUserInfoError::NotFound)
    }
}
