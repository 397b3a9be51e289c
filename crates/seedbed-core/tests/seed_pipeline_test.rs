mod common;

use common::{seed_sqlite, small_spec, sqlite_url};
use seedbed_core::errors::SetupError;
use seedbed_core::model::Customer;
use sqlx::SqlitePool;
use tempfile::TempDir;

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn seeds_sqlite_end_to_end() {
    let dir = TempDir::new().unwrap();
    let url = sqlite_url(&dir);

    let report = seed_sqlite(&url, small_spec(), 42).await.unwrap();
    assert_eq!(report.engine, "sqlite");
    assert_eq!(report.tables.len(), 4);

    for table in &report.tables {
        assert_eq!(
            table.counted,
            Some(table.generated as i64),
            "{} verified count mismatch",
            table.table
        );
    }

    let pool = SqlitePool::connect(&url).await.unwrap();

    let customers: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(customers, 12);

    let orders: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(orders, 20);

    // rows decode back into the generated shape
    let fetched: Vec<Customer> = sqlx::query_as("SELECT * FROM customers ORDER BY customer_id")
        .fetch_all(&pool)
        .await
        .unwrap();
    assert_eq!(fetched.len(), 12);
    assert_eq!(fetched[0].customer_id, 1);
    assert_eq!(fetched[0].email, "user1@test.com");
    assert_eq!(fetched[0].country, "USA");

    pool.close().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn seeded_rows_keep_referential_integrity() {
    let dir = TempDir::new().unwrap();
    let url = sqlite_url(&dir);
    seed_sqlite(&url, small_spec(), 7).await.unwrap();

    let pool = SqlitePool::connect(&url).await.unwrap();

    let orphan_orders: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM orders o
         LEFT JOIN customers c ON c.customer_id = o.customer_id
         WHERE c.customer_id IS NULL",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(orphan_orders, 0);

    let orphan_item_orders: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM order_items oi
         LEFT JOIN orders o ON o.order_id = oi.order_id
         WHERE o.order_id IS NULL",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(orphan_item_orders, 0);

    let orphan_item_products: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM order_items oi
         LEFT JOIN products p ON p.product_id = oi.product_id
         WHERE p.product_id IS NULL",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(orphan_item_products, 0);

    let childless_orders: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM orders o
         LEFT JOIN order_items oi ON oi.order_id = o.order_id
         WHERE oi.order_item_id IS NULL",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(childless_orders, 0);

    pool.close().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn no_duplicate_primary_keys_and_consistent_totals() {
    let dir = TempDir::new().unwrap();
    let url = sqlite_url(&dir);
    seed_sqlite(&url, small_spec(), 99).await.unwrap();

    let pool = SqlitePool::connect(&url).await.unwrap();

    for (table, key) in [
        ("customers", "customer_id"),
        ("products", "product_id"),
        ("orders", "order_id"),
        ("order_items", "order_item_id"),
    ] {
        let duplicates: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM (SELECT {key} FROM {table} GROUP BY {key} HAVING COUNT(*) > 1)"
        ))
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(duplicates, 0, "duplicate keys in {table}");
    }

    let drifting_totals: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM orders o
         JOIN (SELECT order_id, SUM(total_price) AS item_sum
               FROM order_items GROUP BY order_id) s
           ON s.order_id = o.order_id
         WHERE ABS(o.total_amount - s.item_sum) > 0.01",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(drifting_totals, 0);

    pool.close().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn reseeding_a_seeded_database_fails_the_load() {
    let dir = TempDir::new().unwrap();
    let url = sqlite_url(&dir);
    seed_sqlite(&url, small_spec(), 5).await.unwrap();

    // same ids again: the schema pass is guarded, the data load is not
    let err = seed_sqlite(&url, small_spec(), 5).await.unwrap_err();
    assert!(matches!(err, SetupError::Load { .. }), "got {err}");
}
