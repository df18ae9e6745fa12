use sea_orm::entity::prelude::*;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{UserQueryResult, UserResult};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub username: String,
    pub password_hash: String,
    pub active: bool,
    /// Number of followers
    pub followed_value: i32,
    /// Number of users this one follows
    pub follow_value: i32,
    pub gender: i16,
    pub create_time: DateTimeWithTimeZone,
    pub last_login_time: Option<DateTimeWithTimeZone>,
}

impl Model {
    pub fn to_query_result(&self) -> UserQueryResult {
        UserQueryResult {
            id: UserId::from(self.id),
            email: self.email.clone(),
            username: self.username.clone(),
            password_hash: self.password_hash.clone(),
            active: self.active,
            create_time: self.create_time.into(),
            last_login_time: self.last_login_time.map(Into::into),
        }
    }

    pub fn to_repository_result(&self) -> UserResult {
        UserResult {
            id: UserId::from(self.id),
            email: self.email.clone(),
            username: self.username.clone(),
            active: self.active,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
