//! Category service - read-only catalog access.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::Category;
use crate::errors::{AppResult, OptionExt};
use crate::infra::UnitOfWork;

#[async_trait]
pub trait CategoryService: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<Category>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Category>;
}

pub struct CategoryManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> CategoryManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> CategoryService for CategoryManager<U> {
    async fn find_all(&self) -> AppResult<Vec<Category>> {
        self.uow.categories().list().await
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Category> {
        self.uow.categories().find_by_id(id).await?.ok_or_not_found(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::infra::MockCategoryRepository;
    use crate::services::test_support::TestUnitOfWork;

    #[tokio::test]
    async fn test_find_by_id_missing_is_not_found() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        let service = CategoryManager::new(Arc::new(TestUnitOfWork::with_categories(repo)));

        let result = service.find_by_id(7).await;
        assert!(matches!(result, Err(AppError::NotFound(7))));
    }

    #[tokio::test]
    async fn test_find_by_id_success() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_find_by_id().returning(|id| {
            Ok(Some(Category {
                id,
                name: "Books".to_string(),
            }))
        });
        let service = CategoryManager::new(Arc::new(TestUnitOfWork::with_categories(repo)));

        let category = service.find_by_id(2).await.unwrap();
        assert_eq!(category.name, "Books");
    }
}
