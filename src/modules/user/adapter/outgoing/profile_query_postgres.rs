// src/modules/user/adapter/outgoing/profile_query_postgres.rs

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};
use std::sync::Arc;

use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::auth::application::domain::entities::UserId;
use crate::modules::user::application::ports::outgoing::{
    OwnProfileView, ProfileQuery, ProfileQueryError, ProfileView,
};

#[derive(Clone)]
pub struct ProfileQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn load(&self, user_id: UserId) -> Result<Option<users::Model>, ProfileQueryError> {
        users::Entity::find_by_id(user_id.value())
            .one(&*self.db)
            .await
            .map_err(map_db_err)
    }
}

#[async_trait]
impl ProfileQuery for ProfileQueryPostgres {
    async fn find_profile(
        &self,
        user_id: UserId,
    ) -> Result<Option<ProfileView>, ProfileQueryError> {
        Ok(self.load(user_id).await?.map(model_to_profile))
    }

    async fn find_own_profile(
        &self,
        user_id: UserId,
    ) -> Result<Option<OwnProfileView>, ProfileQueryError> {
        Ok(self.load(user_id).await?.map(|model| OwnProfileView {
            email: model.email.clone(),
            profile: model_to_profile(model),
        }))
    }
}

pub(crate) fn model_to_profile(model: users::Model) -> ProfileView {
    ProfileView {
        id: UserId::from(model.id),
        username: model.username,
        gender: model.gender,
        follow_value: model.follow_value,
        followed_value: model.followed_value,
        create_time: model.create_time.into(),
        last_login_time: model.last_login_time.map(Into::into),
    }
}

fn map_db_err(e: DbErr) -> ProfileQueryError {
    ProfileQueryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn user_model(id: i32) -> users::Model {
        let now = Utc::now().fixed_offset();
        users::Model {
            id,
            email: "loyo@example.com".to_string(),
            username: "loyo".to_string(),
            password_hash: "$argon2id$hash".to_string(),
            active: true,
            followed_value: 4,
            follow_value: 2,
            gender: 2,
            create_time: now,
            last_login_time: Some(now),
        }
    }

    #[tokio::test]
    async fn test_find_profile_maps_public_fields() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user_model(1)]])
            .into_connection();

        let query = ProfileQueryPostgres::new(Arc::new(db));
        let view = query.find_profile(UserId::from(1)).await.unwrap().unwrap();

        assert_eq!(view.id, UserId::from(1));
        assert_eq!(view.username, "loyo");
        assert_eq!(view.followed_value, 4);
        assert_eq!(view.follow_value, 2);
        assert!(view.last_login_time.is_some());
    }

    #[tokio::test]
    async fn test_find_own_profile_adds_email() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![user_model(1)]])
            .into_connection();

        let query = ProfileQueryPostgres::new(Arc::new(db));
        let own = query.find_own_profile(UserId::from(1)).await.unwrap().unwrap();

        assert_eq!(own.email, "loyo@example.com");

        let json = serde_json::to_value(&own).unwrap();
        assert_eq!(json["email"], "loyo@example.com");
        assert_eq!(json["username"], "loyo");
        assert!(json.get("password_hash").is_none());
    }

    #[tokio::test]
    async fn test_find_profile_missing_user() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<users::Model>::new()])
            .into_connection();

        let query = ProfileQueryPostgres::new(Arc::new(db));

        assert!(query.find_profile(UserId::from(7)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_profile_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection error".to_string())])
            .into_connection();

        let query = ProfileQueryPostgres::new(Arc::new(db));

        assert!(matches!(
            query.find_profile(UserId::from(7)).await,
            Err(ProfileQueryError::DatabaseError(_))
        ));
    }
}
