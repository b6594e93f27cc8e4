//! Service Container - Centralized service access.
//!
//! Handlers depend on the service traits exposed here, never on the
//! concrete managers.

use std::sync::Arc;

use super::{
    CategoryManager, CategoryService, OrderManager, OrderService, ProductManager, ProductService,
    UserManager, UserService,
};
use crate::infra::Persistence;

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    fn users(&self) -> Arc<dyn UserService>;

    fn categories(&self) -> Arc<dyn CategoryService>;

    fn products(&self) -> Arc<dyn ProductService>;

    fn orders(&self) -> Arc<dyn OrderService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    user_service: Arc<dyn UserService>,
    category_service: Arc<dyn CategoryService>,
    product_service: Arc<dyn ProductService>,
    order_service: Arc<dyn OrderService>,
}

impl Services {
    /// Create service container from database connection
    pub fn from_connection(db: sea_orm::DatabaseConnection) -> Self {
        let uow = Arc::new(Persistence::new(db));

        Self {
            user_service: Arc::new(UserManager::new(uow.clone())),
            category_service: Arc::new(CategoryManager::new(uow.clone())),
            product_service: Arc::new(ProductManager::new(uow.clone())),
            order_service: Arc::new(OrderManager::new(uow)),
        }
    }
}

impl ServiceContainer for Services {
    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn categories(&self) -> Arc<dyn CategoryService> {
        self.category_service.clone()
    }

    fn products(&self) -> Arc<dyn ProductService> {
        self.product_service.clone()
    }

    fn orders(&self) -> Arc<dyn OrderService> {
        self.order_service.clone()
    }
}
