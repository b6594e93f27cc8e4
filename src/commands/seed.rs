//! Seed command - Inserts the demo dataset.

use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::{seed, Database, Persistence, SeedSummary, UnitOfWork};
use crate::with_transaction;

/// Execute the seed command
pub async fn execute(config: Config) -> AppResult<()> {
    let db = Database::connect(&config).await?;
    let uow = Persistence::new(db.get_connection());

    let summary = insert(&uow).await?;
    println!(
        "Seeded {} categories, {} products, {} users, {} orders, {} order items, {} payments",
        summary.categories,
        summary.products,
        summary.users,
        summary.orders,
        summary.order_items,
        summary.payments
    );
    Ok(())
}

/// Insert the demo dataset in a single transaction
pub async fn insert<U: UnitOfWork>(uow: &U) -> AppResult<SeedSummary> {
    with_transaction!(uow, |ctx| seed::insert_demo_data(ctx.connection()).await)
}

/// Insert the demo dataset unless users already exist.
///
/// Returns `None` when the database was left untouched.
pub async fn seed_if_empty<U: UnitOfWork>(uow: &U) -> AppResult<Option<SeedSummary>> {
    let existing = uow.users().count().await?;
    if existing > 0 {
        tracing::info!(users = existing, "database already populated, skipping demo data");
        return Ok(None);
    }

    insert(uow).await.map(Some)
}
