use authstore::repositories::{NewUser, UserStore};
use authstore::{user, Store, StoreError, UserRepository};
use chrono::Utc;

async fn setup() -> (Store, UserRepository) {
    let store = Store::in_memory().await.expect("in-memory store");
    let users = UserRepository::new(store.connection().clone());
    (store, users)
}

fn john() -> NewUser {
    NewUser {
        name: "John Doe".to_string(),
        email: "john.doe@example.com".to_string(),
        password: "secret".to_string(),
    }
}

#[tokio::test]
async fn test_create_then_read_returns_equal_record() {
    let (_store, users) = setup().await;

    let created = users.create(john()).await.expect("create");
    assert!(created.id > 0, "store should assign a non-zero id");
    assert!(created.deleted_at.is_none());

    let read = users.read("John Doe").await.expect("read");
    assert_eq!(read.id, created.id);
    assert_eq!(read.name, "John Doe");
    assert_eq!(read.email, "john.doe@example.com");
    assert_eq!(read.password, "secret");
}

#[tokio::test]
async fn test_read_missing_user_fails_not_found() {
    let (_store, users) = setup().await;

    let err = users.read("nobody").await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)), "got {err:?}");
}

#[tokio::test]
async fn test_duplicate_name_fails_constraint_violation() {
    let (store, users) = setup().await;

    users.create(john()).await.expect("create");
    let err = users
        .create(NewUser {
            name: "John Doe".to_string(),
            email: "other@example.com".to_string(),
            password: "pw".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::ConstraintViolation(_)), "got {err:?}");

    // The existing record is left unchanged
    let survivor = users.read("John Doe").await.expect("read");
    assert_eq!(survivor.email, "john.doe@example.com");
    assert_eq!(store.user_count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_duplicate_email_fails_constraint_violation() {
    let (_store, users) = setup().await;

    users.create(john()).await.expect("create");
    let err = users
        .create(NewUser {
            name: "Someone Else".to_string(),
            email: "john.doe@example.com".to_string(),
            password: "pw".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::ConstraintViolation(_)), "got {err:?}");
}

#[tokio::test]
async fn test_delete_tombstones_but_keeps_the_row() {
    let (store, users) = setup().await;

    users.create(john()).await.expect("create");
    users.delete("John Doe").await.expect("delete");

    let err = users.read("John Doe").await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)), "got {err:?}");

    // Soft delete: the row is physically still there
    assert_eq!(store.user_count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_delete_missing_user_fails_not_found() {
    let (_store, users) = setup().await;

    let err = users.delete("nobody").await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)), "got {err:?}");
}

#[tokio::test]
async fn test_tombstoned_name_can_be_reused() {
    let (store, users) = setup().await;

    users.create(john()).await.expect("create");
    users.delete("John Doe").await.expect("delete");

    // Uniqueness only binds active rows
    let replacement = users.create(john()).await.expect("re-create");
    assert!(replacement.deleted_at.is_none());
    assert_eq!(store.user_count().await.unwrap(), 2);

    let read = users.read("John Doe").await.expect("read");
    assert_eq!(read.id, replacement.id);
}

#[tokio::test]
async fn test_update_missing_id_fails_not_found_without_insert() {
    let (store, users) = setup().await;

    let now = Utc::now();
    let ghost = user::Model {
        id: 4242,
        name: "Ghost".to_string(),
        email: "ghost@example.com".to_string(),
        password: "pw".to_string(),
        created_at: now,
        updated_at: now,
        deleted_at: None,
    };

    let err = users.update(ghost).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)), "got {err:?}");
    assert_eq!(store.user_count().await.unwrap(), 0, "update must not insert");
}

#[tokio::test]
async fn test_john_doe_walkthrough() {
    let (_store, users) = setup().await;

    users.create(john()).await.expect("create");

    let mut user = users.read("John Doe").await.expect("read");
    assert!(user.id > 0);

    user.name = "Jane Doe".to_string();
    users.update(user).await.expect("update");

    let renamed = users.read("Jane Doe").await.expect("read renamed");
    assert_eq!(renamed.email, "john.doe@example.com");
    let err = users.read("John Doe").await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)), "got {err:?}");

    users.delete("Jane Doe").await.expect("delete");
    let err = users.read("Jane Doe").await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)), "got {err:?}");
}
