// src/modules/user/adapter/outgoing/follow_repository_postgres.rs

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use std::sync::Arc;
use tracing::warn;

use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::auth::application::domain::entities::UserId;
use crate::modules::user::adapter::outgoing::sea_orm_entity::follows;
use crate::modules::user::application::ports::outgoing::{
    FollowOutcome, FollowRepository, FollowRepositoryError,
};

#[derive(Clone)]
pub struct FollowRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl FollowRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> FollowRepositoryError {
        FollowRepositoryError::DatabaseError(e.to_string())
    }

    /// `col = col + 1` or `col = col - 1` on a single user row.
    async fn bump_counter(
        txn: &DatabaseTransaction,
        user_id: UserId,
        column: users::Column,
        increment: bool,
    ) -> Result<(), FollowRepositoryError> {
        let expr = if increment {
            Expr::col(column).add(1)
        } else {
            Expr::col(column).sub(1)
        };

        let result = users::Entity::update_many()
            .col_expr(column, expr)
            .filter(users::Column::Id.eq(user_id.value()))
            .exec(txn)
            .await
            .map_err(Self::map_db_err)?;

        if result.rows_affected != 1 {
            return Err(FollowRepositoryError::NoRowsAffected("counter update"));
        }
        Ok(())
    }

    async fn apply_toggle(
        txn: &DatabaseTransaction,
        follower: UserId,
        followed: UserId,
    ) -> Result<FollowOutcome, FollowRepositoryError> {
        let existing = follows::Entity::find_by_id((follower.value(), followed.value()))
            .one(txn)
            .await
            .map_err(Self::map_db_err)?;

        let outcome = match existing {
            Some(_) => {
                let deleted = follows::Entity::delete_many()
                    .filter(follows::Column::FollowerId.eq(follower.value()))
                    .filter(follows::Column::FollowedId.eq(followed.value()))
                    .exec(txn)
                    .await
                    .map_err(Self::map_db_err)?;

                if deleted.rows_affected != 1 {
                    return Err(FollowRepositoryError::NoRowsAffected("edge delete"));
                }
                FollowOutcome::Unfollowed
            }
            None => {
                let edge = follows::ActiveModel {
                    follower_id: Set(follower.value()),
                    followed_id: Set(followed.value()),
                    create_time: NotSet,
                };

                let inserted = follows::Entity::insert(edge)
                    .exec_without_returning(txn)
                    .await
                    .map_err(Self::map_db_err)?;

                if inserted != 1 {
                    return Err(FollowRepositoryError::NoRowsAffected("edge insert"));
                }
                FollowOutcome::Followed
            }
        };

        let increment = outcome == FollowOutcome::Followed;
        Self::bump_counter(txn, follower, users::Column::FollowValue, increment).await?;
        Self::bump_counter(txn, followed, users::Column::FollowedValue, increment).await?;

        Ok(outcome)
    }
}

#[async_trait]
impl FollowRepository for FollowRepositoryPostgres {
    async fn toggle(
        &self,
        follower: UserId,
        followed: UserId,
    ) -> Result<FollowOutcome, FollowRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        match Self::apply_toggle(&txn, follower, followed).await {
            Ok(outcome) => {
                txn.commit().await.map_err(Self::map_db_err)?;
                Ok(outcome)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    warn!(error = %rollback_err, "Follow toggle rollback failed");
                }
                Err(e)
            }
        }
    }
}
