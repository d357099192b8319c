//! In-memory user repository implementation

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::UserRepository;
use crate::domain::User;
use crate::errors::{AppError, AppResult};

#[derive(Debug)]
struct Table {
    next_id: i64,
    rows: BTreeMap<i64, User>,
}

/// In-memory implementation of UserRepository.
///
/// Identifiers start at 1 and are never reused, even after deletes.
#[derive(Debug)]
pub struct InMemoryUserRepository {
    table: RwLock<Table>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, user: User) -> AppResult<User> {
        let mut table = self.table.write().await;

        let id = match user.id {
            Some(id) if table.rows.contains_key(&id) => id,
            Some(_) => return Err(AppError::NotFound),
            None => {
                let id = table.next_id;
                table.next_id += 1;
                id
            }
        };

        let persisted = user.with_id(id);
        table.rows.insert(id, persisted.clone());

        Ok(persisted)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        let mut table = self.table.write().await;
        table.rows.remove(&id);
        Ok(())
    }

    async fn exists_by_id(&self, id: i64) -> AppResult<bool> {
        let table = self.table.read().await;
        Ok(table.rows.contains_key(&id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_assigns_sequential_ids() {
        let repo = InMemoryUserRepository::new();

        let first = repo.save(User::new("John Doe", "johndoe@example.com")).await.unwrap();
        let second = repo.save(User::new("John Doe", "johndoe@example.com")).await.unwrap();

        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
        assert_eq!(repo.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_save_with_id_overwrites_row() {
        let repo = InMemoryUserRepository::new();
        let saved = repo.save(User::new("John Doe", "johndoe@example.com")).await.unwrap();

        let mut changed = saved.clone();
        changed.name = "Jane Doe".to_string();
        let updated = repo.save(changed).await.unwrap();

        assert_eq!(updated.id, saved.id);
        assert_eq!(repo.find_by_id(1).await.unwrap().unwrap().name, "Jane Doe");
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_save_with_unknown_id_is_not_found() {
        let repo = InMemoryUserRepository::new();
        let result = repo.save(User::new("John Doe", "johndoe@example.com").with_id(42)).await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_and_exists() {
        let repo = InMemoryUserRepository::new();
        repo.save(User::new("John Doe", "johndoe@example.com")).await.unwrap();

        assert!(repo.exists_by_id(1).await.unwrap());
        repo.delete_by_id(1).await.unwrap();
        assert!(!repo.exists_by_id(1).await.unwrap());
        assert!(repo.find_by_id(1).await.unwrap().is_none());

        // deleting again is a no-op
        repo.delete_by_id(1).await.unwrap();
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryUserRepository::new();
        repo.save(User::new("A", "a@example.com")).await.unwrap();
        repo.delete_by_id(1).await.unwrap();

        let next = repo.save(User::new("B", "b@example.com")).await.unwrap();
        assert_eq!(next.id, Some(2));
    }
}
