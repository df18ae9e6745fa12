use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::user::application::ports::incoming::use_cases::{
    GetMyInfoError, GetMyInfoUseCase,
};
use crate::modules::user::application::ports::outgoing::{OwnProfileView, ProfileQuery};

pub struct GetMyInfoService<Q>
where
    Q: ProfileQuery,
{
    query: Q,
}

impl<Q> GetMyInfoService<Q>
where
    Q: ProfileQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetMyInfoUseCase for GetMyInfoService<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<OwnProfileView, GetMyInfoError> {
        self.query
            .find_own_profile(user_id)
            .await
            .map_err(|e| GetMyInfoError::QueryError(e.to_string()))?
            .ok_or(GetMyInfoError::NotFound)
    }
}
