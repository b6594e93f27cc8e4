//! Category repository implementation.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use super::base::BaseRepository;
use super::entities::CategoryEntity;
use crate::domain::Category;
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Read access to categories.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Category>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Category>>;
}

pub struct CategoryStore {
    db: DatabaseConnection,
}

impl CategoryStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl BaseRepository<CategoryEntity> for CategoryStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl CategoryRepository for CategoryStore {
    async fn list(&self) -> AppResult<Vec<Category>> {
        let models = self.find_all_models().await?;
        Ok(models.into_iter().map(Category::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Category>> {
        Ok(self.find_model(id).await?.map(Category::from))
    }
}
