//! User service - Handles user-related business logic.
//!
//! Inputs reaching this layer have already passed field validation;
//! the service decides which repository calls a use case makes.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::User;
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Persist a new user; the returned copy carries its assigned ID
    async fn create_user(&self, user: User) -> AppResult<User>;

    /// Get user by ID
    async fn get_user(&self, id: i64) -> AppResult<User>;

    /// List all users
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Replace name and email of an existing user
    async fn replace_user(&self, id: i64, user: User) -> AppResult<User>;

    /// Delete an existing user
    async fn delete_user(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of UserService over a repository.
pub struct UserManager {
    user_repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, user: User) -> AppResult<User> {
        let transient = User { id: None, ..user };
        let created = self.user_repo.save(transient).await?;
        tracing::info!(user_id = ?created.id, "User created");
        Ok(created)
    }

    async fn get_user(&self, id: i64) -> AppResult<User> {
        self.user_repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.user_repo.find_all().await
    }

    async fn replace_user(&self, id: i64, user: User) -> AppResult<User> {
        if !self.user_repo.exists_by_id(id).await? {
            return Err(AppError::NotFound);
        }

        let updated = self.user_repo.save(user.with_id(id)).await?;
        tracing::info!(user_id = id, "User replaced");
        Ok(updated)
    }

    async fn delete_user(&self, id: i64) -> AppResult<()> {
        if !self.user_repo.exists_by_id(id).await? {
            return Err(AppError::NotFound);
        }

        self.user_repo.delete_by_id(id).await?;
        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockUserRepository;
    use mockall::predicate::eq;

    fn service(repo: MockUserRepository) -> UserManager {
        UserManager::new(Arc::new(repo))
    }

    #[tokio::test]
    async fn test_create_user_saves_once_without_id() {
        let mut repo = MockUserRepository::new();
        repo.expect_save()
            .withf(|user| user.id.is_none() && user.name == "John Doe")
            .times(1)
            .returning(|user| Ok(user.with_id(1)));

        let created = service(repo)
            .create_user(User::new("John Doe", "johndoe@example.com").with_id(99))
            .await
            .unwrap();

        assert_eq!(created.id, Some(1));
        assert_eq!(created.email, "johndoe@example.com");
    }

    #[tokio::test]
    async fn test_create_user_propagates_storage_failure() {
        let mut repo = MockUserRepository::new();
        repo.expect_save()
            .times(1)
            .returning(|_| Err(AppError::Database(sea_orm::DbErr::Custom("down".into()))));

        let result = service(repo)
            .create_user(User::new("John Doe", "johndoe@example.com"))
            .await;

        assert!(matches!(result, Err(AppError::Database(_))));
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().with(eq(5)).returning(|_| Ok(None));

        let result = service(repo).get_user(5).await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_replace_user_uses_path_id() {
        let mut repo = MockUserRepository::new();
        repo.expect_exists_by_id().with(eq(3)).returning(|_| Ok(true));
        repo.expect_save()
            .withf(|user| user.id == Some(3))
            .times(1)
            .returning(Ok);

        let updated = service(repo)
            .replace_user(3, User::new("Jane Doe", "jane@example.com"))
            .await
            .unwrap();

        assert_eq!(updated.id, Some(3));
        assert_eq!(updated.name, "Jane Doe");
    }

    #[tokio::test]
    async fn test_replace_missing_user_never_saves() {
        let mut repo = MockUserRepository::new();
        repo.expect_exists_by_id().returning(|_| Ok(false));
        repo.expect_save().times(0);

        let result = service(repo)
            .replace_user(3, User::new("Jane Doe", "jane@example.com"))
            .await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_exists_by_id().with(eq(4)).returning(|_| Ok(true));
        repo.expect_delete_by_id().with(eq(4)).times(1).returning(|_| Ok(()));

        assert!(service(repo).delete_user(4).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_missing_user() {
        let mut repo = MockUserRepository::new();
        repo.expect_exists_by_id().returning(|_| Ok(false));
        repo.expect_delete_by_id().times(0);

        let result = service(repo).delete_user(4).await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }
}
