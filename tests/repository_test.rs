//! Store and constraint tests against an in-memory SQLite database.

mod common;

use rust_decimal::Decimal;
use sea_orm::ConnectionTrait;

use order_api::commands::seed;
use order_api::domain::{OrderStatus, UserChanges};
use order_api::errors::AppError;
use order_api::infra::{
    CategoryRepository, CategoryStore, OrderRepository, OrderStore, Persistence,
    ProductRepository, ProductStore, UnitOfWork, UserRepository, UserStore,
};
use order_api::types::Patch;

use common::{count, memory_database, seeded_database};

#[tokio::test]
async fn test_insert_then_fetch_returns_equal_record() {
    let db = memory_database().await;
    let users = UserStore::new(db.get_connection());

    let created = users
        .create(
            "Alex Green".to_string(),
            "alex@gmail.com".to_string(),
            None,
            "argon2-hash".to_string(),
        )
        .await
        .unwrap();
    let fetched = users.find_by_id(created.id).await.unwrap().unwrap();

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, "Alex Green");
    assert_eq!(fetched.email, "alex@gmail.com");
    assert_eq!(fetched.phone, None);
    assert_eq!(fetched.password_hash, "argon2-hash");
}

#[tokio::test]
async fn test_missing_ids_are_absent() {
    let db = seeded_database().await;

    assert!(UserStore::new(db.get_connection()).find_by_id(99).await.unwrap().is_none());
    assert!(OrderStore::new(db.get_connection()).find_by_id(99).await.unwrap().is_none());
    assert!(ProductStore::new(db.get_connection()).find_by_id(0).await.unwrap().is_none());
    assert!(CategoryStore::new(db.get_connection()).find_by_id(-1).await.unwrap().is_none());
}

#[tokio::test]
async fn test_update_overwrites_only_provided_fields() {
    let db = seeded_database().await;
    let users = UserStore::new(db.get_connection());

    let updated = users
        .update(
            1,
            UserChanges {
                email: Some("maria.brown@gmail.com".to_string()),
                phone: Patch::Clear,
                ..UserChanges::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Maria Brown");
    assert_eq!(updated.email, "maria.brown@gmail.com");
    assert_eq!(updated.phone, None);

    let stored = users.find_by_id(1).await.unwrap().unwrap();
    assert_eq!(stored.email, "maria.brown@gmail.com");
    assert_eq!(stored.phone, None);
}

#[tokio::test]
async fn test_update_missing_user_is_not_found() {
    let db = memory_database().await;
    let result = UserStore::new(db.get_connection())
        .update(7, UserChanges::default())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(7))));
}

#[tokio::test]
async fn test_delete_user_with_orders_is_integrity_violation() {
    let db = seeded_database().await;
    let users = UserStore::new(db.get_connection());

    match users.delete(1).await {
        Err(AppError::Integrity(message)) => {
            assert_eq!(message, "Cannot delete user 1: it is still referenced by orders")
        }
        other => panic!("expected integrity violation, got {:?}", other),
    }

    assert!(users.find_by_id(1).await.unwrap().is_some());
    assert_eq!(count(&db, "SELECT COUNT(*) AS n FROM orders WHERE client_id = 1").await, 2);
}

#[tokio::test]
async fn test_delete_user_after_removing_their_orders() {
    let db = seeded_database().await;
    let users = UserStore::new(db.get_connection());

    db.connection()
        .execute_unprepared("DELETE FROM orders WHERE client_id = 1")
        .await
        .unwrap();
    users.delete(1).await.unwrap();

    assert!(users.find_by_id(1).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_user_without_orders() {
    let db = seeded_database().await;
    let users = UserStore::new(db.get_connection());

    let created = users
        .create(
            "Bob Grey".to_string(),
            "bob@gmail.com".to_string(),
            Some("955555555".to_string()),
            "argon2-hash".to_string(),
        )
        .await
        .unwrap();
    users.delete(created.id).await.unwrap();

    let remaining: Vec<i32> = users.list().await.unwrap().iter().map(|u| u.id).collect();
    assert_eq!(remaining, vec![1, 2]);
}

#[tokio::test]
async fn test_delete_missing_user_is_not_found() {
    let db = memory_database().await;
    let result = UserStore::new(db.get_connection()).delete(3).await;

    assert!(matches!(result, Err(AppError::NotFound(3))));
}

#[tokio::test]
async fn test_deleting_order_cascades_to_items_and_payment() {
    let db = seeded_database().await;

    db.connection()
        .execute_unprepared("DELETE FROM orders WHERE id = 1")
        .await
        .unwrap();

    assert_eq!(count(&db, "SELECT COUNT(*) AS n FROM payments").await, 0);
    assert_eq!(count(&db, "SELECT COUNT(*) AS n FROM order_items WHERE order_id = 1").await, 0);
    assert_eq!(count(&db, "SELECT COUNT(*) AS n FROM order_items").await, 2);
    assert!(OrderStore::new(db.get_connection()).find_by_id(1).await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_order_item_key_is_rejected() {
    let db = seeded_database().await;

    let result = db
        .connection()
        .execute_unprepared(
            "INSERT INTO order_items (order_id, product_id, quantity, price) VALUES (1, 1, 5, 90.5)",
        )
        .await;

    assert!(result.is_err());
    assert_eq!(count(&db, "SELECT COUNT(*) AS n FROM order_items").await, 4);
}

#[tokio::test]
async fn test_orders_are_assembled_with_items_and_payment() {
    let db = seeded_database().await;
    let orders = OrderStore::new(db.get_connection()).list().await.unwrap();

    assert_eq!(orders.len(), 3);

    let first = &orders[0];
    assert_eq!(first.status, OrderStatus::Paid);
    assert_eq!(first.client.name, "Maria Brown");
    assert_eq!(first.items().len(), 2);
    assert_eq!(first.payment().map(|p| p.order_id), Some(first.id));
    // 2 × 90.5 + 1 × 1250
    assert_eq!(first.total(), Decimal::new(1431, 0));

    let second = &orders[1];
    assert_eq!(second.status, OrderStatus::WaitingPayment);
    assert_eq!(second.client.name, "Alex Green");
    assert!(second.payment().is_none());
    assert_eq!(second.total(), Decimal::new(2500, 0));
}

#[tokio::test]
async fn test_products_carry_their_categories() {
    let db = seeded_database().await;
    let products = ProductStore::new(db.get_connection()).list().await.unwrap();

    assert_eq!(products.len(), 5);
    let tv = products.iter().find(|p| p.name == "Smart TV").unwrap();
    let names: Vec<&str> = tv.categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Electronics", "Computers"]);

    let categories = CategoryStore::new(db.get_connection()).list().await.unwrap();
    assert_eq!(categories.len(), 3);
}

#[tokio::test]
async fn test_seed_if_empty_runs_once() {
    let db = memory_database().await;
    let uow = Persistence::new(db.get_connection());

    let first = seed::seed_if_empty(&uow).await.unwrap();
    assert_eq!(first.map(|s| s.order_items), Some(4));

    let second = seed::seed_if_empty(&uow).await.unwrap();
    assert!(second.is_none());
    assert_eq!(uow.users().count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_unknown_stored_status_is_internal_error() {
    let db = seeded_database().await;
    db.connection()
        .execute_unprepared("UPDATE orders SET status = 9 WHERE id = 2")
        .await
        .unwrap();

    let orders = OrderStore::new(db.get_connection());
    let result = orders.find_by_id(2).await;
    assert!(matches!(result, Err(AppError::Internal(_))), "got {:?}", result);
    assert!(orders.find_by_id(1).await.unwrap().is_some());
}
