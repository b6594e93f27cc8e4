//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and migrations
//! - Repositories over the SeaORM entities
//! - Unit of Work for transaction management
//! - Demo data seeding

pub mod db;
pub mod repositories;
pub mod seed;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use repositories::{
    CategoryRepository, CategoryStore, OrderRepository, OrderStore, ProductRepository,
    ProductStore, UserRepository, UserStore,
};
pub use seed::SeedSummary;
pub use unit_of_work::{Persistence, TransactionContext, TxFuture, UnitOfWork};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{
    MockCategoryRepository, MockOrderRepository, MockProductRepository, MockUserRepository,
};
