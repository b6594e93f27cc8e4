//! Product repository implementation.
//!
//! Products are returned with their categories, loaded through the
//! `product_categories` join table.

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection, LoaderTrait};

use super::base::BaseRepository;
use super::entities::{product, CategoryEntity, ProductCategoryEntity, ProductEntity};
use crate::domain::Product;
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Read access to the product catalog.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// List products with their categories, ordered by id
    async fn list(&self) -> AppResult<Vec<Product>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Product>>;
}

pub struct ProductStore {
    db: DatabaseConnection,
}

impl ProductStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl BaseRepository<ProductEntity> for ProductStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

/// Attach categories to product rows, keeping the row order.
pub(crate) async fn with_categories<C>(models: Vec<product::Model>, db: &C) -> AppResult<Vec<Product>>
where
    C: ConnectionTrait,
{
    if models.is_empty() {
        return Ok(Vec::new());
    }

    let categories = models
        .load_many_to_many(CategoryEntity, ProductCategoryEntity, db)
        .await?;

    Ok(models
        .into_iter()
        .zip(categories)
        .map(|(model, categories)| model.into_product(categories))
        .collect())
}

#[async_trait]
impl ProductRepository for ProductStore {
    async fn list(&self) -> AppResult<Vec<Product>> {
        let models = self.find_all_models().await?;
        with_categories(models, &self.db).await
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Product>> {
        let Some(model) = self.find_model(id).await? else {
            return Ok(None);
        };
        Ok(with_categories(vec![model], &self.db).await?.pop())
    }
}
