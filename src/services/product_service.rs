//! Product service - read-only catalog access.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::Product;
use crate::errors::{AppResult, OptionExt};
use crate::infra::UnitOfWork;

#[async_trait]
pub trait ProductService: Send + Sync {
    /// List products together with their categories
    async fn find_all(&self) -> AppResult<Vec<Product>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Product>;
}

pub struct ProductManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ProductManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> ProductService for ProductManager<U> {
    async fn find_all(&self) -> AppResult<Vec<Product>> {
        self.uow.products().list().await
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Product> {
        self.uow.products().find_by_id(id).await?.ok_or_not_found(id)
    }
}
