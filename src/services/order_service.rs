//! Order service - read-only access to orders with items and payment.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::Order;
use crate::errors::{AppResult, OptionExt};
use crate::infra::UnitOfWork;

#[async_trait]
pub trait OrderService: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Order>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Order>;
}

pub struct OrderManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> OrderManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> OrderService for OrderManager<U> {
    async fn find_all(&self) -> AppResult<Vec<Order>> {
        self.uow.orders().list().await
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Order> {
        self.uow.orders().find_by_id(id).await?.ok_or_not_found(id)
    }
}
