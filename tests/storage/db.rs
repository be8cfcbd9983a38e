use authstore::Store;

#[tokio::test]
async fn test_in_memory_store_creation() {
    // An in-memory store comes up with its schema declared
    let result = Store::in_memory().await;
    assert!(result.is_ok(), "Store should be created successfully");
}

#[tokio::test]
async fn test_fresh_store_is_empty() {
    let store = Store::in_memory().await.expect("in-memory store");
    assert_eq!(store.user_count().await.unwrap(), 0);
    assert_eq!(store.session_count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_stores_are_isolated() {
    use authstore::repositories::{NewUser, UserStore};
    use authstore::UserRepository;

    let a = Store::in_memory().await.expect("in-memory store");
    let b = Store::in_memory().await.expect("in-memory store");

    let users_a = UserRepository::new(a.connection().clone());
    users_a
        .create(NewUser {
            name: "solo".to_string(),
            email: "solo@example.com".to_string(),
            password: "pw".to_string(),
        })
        .await
        .expect("create");

    assert_eq!(a.user_count().await.unwrap(), 1);
    assert_eq!(b.user_count().await.unwrap(), 0);
}
