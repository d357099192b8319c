//! SeaORM user store tests against an in-memory SQLite database.

use sea_orm::ConnectOptions;

use user_crud_api::domain::User;
use user_crud_api::errors::AppError;
use user_crud_api::infra::{Database, UserRepository, UserStore};

async fn store() -> (Database, UserStore) {
    // Every pooled connection would open its own in-memory database
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1);

    let db = Database::connect_with_options(options)
        .await
        .expect("sqlite connection with migrations");
    let store = UserStore::new(db.get_connection());
    (db, store)
}

#[tokio::test]
async fn test_save_assigns_distinct_ids() {
    let (_db, store) = store().await;

    let first = store.save(User::new("John Doe", "johndoe@example.com")).await.unwrap();
    let second = store.save(User::new("John Doe", "johndoe@example.com")).await.unwrap();

    assert!(first.id.is_some());
    assert!(second.id.is_some());
    assert_ne!(first.id, second.id);
    assert_eq!(first.name, "John Doe");
    assert_eq!(first.email, "johndoe@example.com");
}

#[tokio::test]
async fn test_find_by_id_and_find_all() {
    let (_db, store) = store().await;
    let john = store.save(User::new("John Doe", "johndoe@example.com")).await.unwrap();
    let jane = store.save(User::new("Jane Doe", "jane@example.com")).await.unwrap();

    let found = store.find_by_id(john.id.unwrap()).await.unwrap();
    assert_eq!(found, Some(john.clone()));

    let all = store.find_all().await.unwrap();
    assert_eq!(all, vec![john, jane]);
}

#[tokio::test]
async fn test_save_with_id_updates_row() {
    let (_db, store) = store().await;
    let saved = store.save(User::new("John Doe", "johndoe@example.com")).await.unwrap();
    let id = saved.id.unwrap();

    let updated = store
        .save(User::new("Jane Doe", "jane@example.com").with_id(id))
        .await
        .unwrap();

    assert_eq!(updated.id, Some(id));
    assert_eq!(store.find_by_id(id).await.unwrap().unwrap().name, "Jane Doe");
    assert_eq!(store.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_save_with_unknown_id_is_not_found() {
    let (_db, store) = store().await;

    let result = store
        .save(User::new("Jane Doe", "jane@example.com").with_id(404))
        .await;

    assert!(matches!(result, Err(AppError::NotFound)));
}

#[tokio::test]
async fn test_exists_and_delete() {
    let (_db, store) = store().await;
    let id = store
        .save(User::new("John Doe", "johndoe@example.com"))
        .await
        .unwrap()
        .id
        .unwrap();

    assert!(store.exists_by_id(id).await.unwrap());
    store.delete_by_id(id).await.unwrap();
    assert!(!store.exists_by_id(id).await.unwrap());
    assert!(store.find_by_id(id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_ping_and_migration_status() {
    let (db, _store) = store().await;

    db.ping().await.unwrap();
    let status = db.migration_status().await.unwrap();
    assert!(status.iter().all(|(_, applied)| *applied));
    assert_eq!(status.len(), 1);
}
