//! Hand-written UnitOfWork over mocked repositories.

use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::{AppError, AppResult};
use crate::infra::{
    CategoryRepository, MockCategoryRepository, MockOrderRepository, MockProductRepository,
    MockUserRepository, OrderRepository, ProductRepository, TransactionContext, TxFuture,
    UnitOfWork, UserRepository,
};

/// Each repository defaults to a mock with no expectations, so any
/// unexpected call fails the test.
pub(crate) struct TestUnitOfWork {
    users: Arc<MockUserRepository>,
    categories: Arc<MockCategoryRepository>,
    products: Arc<MockProductRepository>,
    orders: Arc<MockOrderRepository>,
}

impl Default for TestUnitOfWork {
    fn default() -> Self {
        Self {
            users: Arc::new(MockUserRepository::new()),
            categories: Arc::new(MockCategoryRepository::new()),
            products: Arc::new(MockProductRepository::new()),
            orders: Arc::new(MockOrderRepository::new()),
        }
    }
}

impl TestUnitOfWork {
    pub(crate) fn with_users(repo: MockUserRepository) -> Self {
        Self {
            users: Arc::new(repo),
            ..Self::default()
        }
    }

    pub(crate) fn with_categories(repo: MockCategoryRepository) -> Self {
        Self {
            categories: Arc::new(repo),
            ..Self::default()
        }
    }

    pub(crate) fn with_products(repo: MockProductRepository) -> Self {
        Self {
            products: Arc::new(repo),
            ..Self::default()
        }
    }

    pub(crate) fn with_orders(repo: MockOrderRepository) -> Self {
        Self {
            orders: Arc::new(repo),
            ..Self::default()
        }
    }
}

#[async_trait]
impl UnitOfWork for TestUnitOfWork {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    fn categories(&self) -> Arc<dyn CategoryRepository> {
        self.categories.clone()
    }

    fn products(&self) -> Arc<dyn ProductRepository> {
        self.products.clone()
    }

    fn orders(&self) -> Arc<dyn OrderRepository> {
        self.orders.clone()
    }

    async fn transaction<F, T>(&self, _f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        Err(AppError::internal("Transactions not supported in test mock"))
    }
}
