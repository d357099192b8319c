//! User repository trait and its SeaORM implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Unchanged, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryOrder, Set,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::User;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user without id, or overwrite the row of a user with one.
    /// Returns the persisted copy carrying its identifier.
    async fn save(&self, user: User) -> AppResult<User>;

    /// Find user by ID
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// List all users ordered by ID
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Delete user by ID (no-op if absent)
    async fn delete_by_id(&self, id: i64) -> AppResult<()>;

    /// Check whether a user with this ID exists
    async fn exists_by_id(&self, id: i64) -> AppResult<bool>;
}

/// Concrete implementation of UserRepository backed by SeaORM
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn save(&self, user: User) -> AppResult<User> {
        let model = match user.id {
            None => {
                let active_model = ActiveModel {
                    id: NotSet,
                    name: Set(user.name),
                    email: Set(user.email),
                };
                active_model.insert(&self.db).await?
            }
            Some(id) => {
                let active_model = ActiveModel {
                    id: Unchanged(id),
                    name: Set(user.name),
                    email: Set(user.email),
                };
                active_model.update(&self.db).await.map_err(|e| match e {
                    DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => AppError::NotFound,
                    other => AppError::from(other),
                })?
            }
        };

        Ok(User::from(model))
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        UserEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(())
    }

    async fn exists_by_id(&self, id: i64) -> AppResult<bool> {
        let count = UserEntity::find_by_id(id)
            .count(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(count > 0)
    }
}
