use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::user_repository::{
    CreateUserData, UserRepository, UserRepositoryError, UserResult,
};

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Entity as UserEntity, Model as UserModel,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_write_err(e: DbErr) -> UserRepositoryError {
        let err_str = e.to_string().to_lowercase();
        if err_str.contains("23505")
            || err_str.contains("duplicate key")
            || err_str.contains("unique constraint")
        {
            return UserRepositoryError::UserAlreadyExists;
        }
        UserRepositoryError::DatabaseError(e.to_string())
    }

    async fn load(&self, user_id: UserId) -> Result<UserModel, UserRepositoryError> {
        UserEntity::find_by_id(user_id.value())
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: CreateUserData) -> Result<UserResult, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: NotSet,
            email: Set(user.email),
            username: Set(user.username),
            password_hash: Set(user.password_hash),
            active: Set(false),
            followed_value: Set(0),
            follow_value: Set(0),
            gender: Set(0),
            create_time: NotSet,
            last_login_time: Set(None),
        };

        let inserted = active_user
            .insert(&*self.db)
            .await
            .map_err(Self::map_write_err)?;

        Ok(inserted.to_repository_result())
    }

    async fn activate_user(&self, user_id: UserId) -> Result<UserResult, UserRepositoryError> {
        let mut active_user: UserActiveModel = self.load(user_id).await?.into();
        active_user.active = Set(true);

        let activated = active_user
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(activated.to_repository_result())
    }

    async fn update_credentials(
        &self,
        user_id: UserId,
        email: String,
        password_hash: String,
    ) -> Result<UserResult, UserRepositoryError> {
        let mut active_user: UserActiveModel = self.load(user_id).await?.into();
        active_user.email = Set(email);
        active_user.password_hash = Set(password_hash);
        active_user.active = Set(false);

        let updated = active_user
            .update(&*self.db)
            .await
            .map_err(Self::map_write_err)?;

        Ok(updated.to_repository_result())
    }

    async fn record_login(&self, user_id: UserId) -> Result<(), UserRepositoryError> {
        let mut active_user: UserActiveModel = self.load(user_id).await?.into();
        active_user.last_login_time = Set(Some(Utc::now().into()));

        active_user
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
