// src/modules/user/adapter/outgoing/profile_repository_postgres.rs

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;

use crate::auth::adapter::outgoing::sea_orm_entity::users::{Column, Entity};
use crate::auth::application::domain::entities::UserId;
use crate::modules::user::application::ports::outgoing::{
    PatchProfileData, ProfileRepository, ProfileRepositoryError,
};

#[derive(Clone)]
pub struct ProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn patch_profile(
        &self,
        user_id: UserId,
        data: PatchProfileData,
    ) -> Result<(), ProfileRepositoryError> {
        if data.is_empty() {
            return Ok(());
        }

        let mut update = Entity::update_many().filter(Column::Id.eq(user_id.value()));

        if let Some(username) = data.username {
            update = update.col_expr(Column::Username, Expr::value(username));
        }
        if let Some(gender) = data.gender {
            update = update.col_expr(Column::Gender, Expr::value(gender));
        }

        let result = update
            .exec(&*self.db)
            .await
            .map_err(|e| ProfileRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(ProfileRepositoryError::NotFound);
        }

        Ok(())
    }
}
