//! Shared fixtures: an in-memory SQLite database with the schema applied.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use sea_orm::{ConnectionTrait, Statement};

use order_api::api::{create_router, AppState};
use order_api::commands::seed;
use order_api::config::Config;
use order_api::infra::{Database, Persistence};

/// Fresh database with every migration applied and no rows
pub async fn memory_database() -> Database {
    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        database_max_connections: 1,
        ..Config::default()
    };
    Database::connect(&config)
        .await
        .expect("in-memory database should migrate")
}

/// Database holding the demo dataset
pub async fn seeded_database() -> Database {
    let db = memory_database().await;
    seed::insert(&Persistence::new(db.get_connection()))
        .await
        .expect("demo data should insert");
    db
}

/// Router wired to a seeded database
pub async fn seeded_app() -> Router {
    let db = seeded_database().await;
    create_router(AppState::from_database(Arc::new(db)))
}

/// Run a `SELECT COUNT(*) AS n ...` statement
pub async fn count(db: &Database, sql: &str) -> i64 {
    let backend = db.connection().get_database_backend();
    let row = db
        .connection()
        .query_one(Statement::from_string(backend, sql.to_string()))
        .await
        .expect("count query should run")
        .expect("count query returns a row");
    row.try_get::<i64>("", "n").expect("count column")
}
