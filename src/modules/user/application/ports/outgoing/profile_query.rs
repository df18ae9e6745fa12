// src/modules/user/application/ports/outgoing/profile_query.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::auth::application::domain::entities::UserId;

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

/// What anyone may see about a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ProfileView {
    #[schema(value_type = i32, example = 1)]
    pub id: UserId,
    #[schema(example = "loyo")]
    pub username: String,
    /// 0 unknown, 1 male, 2 female
    #[schema(example = 2)]
    pub gender: i16,
    /// Users this one follows
    pub follow_value: i32,
    /// Users following this one
    pub followed_value: i32,
    pub create_time: DateTime<Utc>,
    pub last_login_time: Option<DateTime<Utc>>,
}

/// The caller's own profile, which also carries the email
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct OwnProfileView {
    #[serde(flatten)]
    pub profile: ProfileView,
    #[schema(example = "loyo@example.com")]
    pub email: String,
}

/// Author block embedded in blog and comment views
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AuthorSummary {
    #[schema(value_type = i32, example = 1)]
    pub id: UserId,
    pub username: String,
    pub gender: i16,
    pub follow_value: i32,
    pub followed_value: i32,
}

impl From<ProfileView> for AuthorSummary {
    fn from(profile: ProfileView) -> Self {
        Self {
            id: profile.id,
            username: profile.username,
            gender: profile.gender,
            follow_value: profile.follow_value,
            followed_value: profile.followed_value,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProfileQuery: Send + Sync {
    async fn find_profile(&self, user_id: UserId)
        -> Result<Option<ProfileView>, ProfileQueryError>;

    async fn find_own_profile(
        &self,
        user_id: UserId,
    ) -> Result<Option<OwnProfileView>, ProfileQueryError>;
}
