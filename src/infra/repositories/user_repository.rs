//! User repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    Set,
};

use super::base::BaseRepository;
use super::entities::order::{self, Entity as OrderEntity};
use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{User, UserChanges};
use crate::errors::{AppError, AppResult, OptionExt};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List every user, ordered by id
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Find user by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Insert a user; the id is assigned by the database
    async fn create(
        &self,
        name: String,
        email: String,
        phone: Option<String>,
        password_hash: String,
    ) -> AppResult<User>;

    /// Apply a partial update and return the stored result
    async fn update(&self, id: i32, changes: UserChanges) -> AppResult<User>;

    /// Delete user by ID.
    ///
    /// Fails with `NotFound` when absent and `Integrity` while orders
    /// still reference the user.
    async fn delete(&self, id: i32) -> AppResult<()>;

    /// Number of stored users
    async fn count(&self) -> AppResult<u64>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl BaseRepository<UserEntity> for UserStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn list(&self) -> AppResult<Vec<User>> {
        let models = self.find_all_models().await?;
        Ok(models.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        Ok(self.find_model(id).await?.map(User::from))
    }

    async fn create(
        &self,
        name: String,
        email: String,
        phone: Option<String>,
        password_hash: String,
    ) -> AppResult<User> {
        let active_model = ActiveModel {
            name: Set(name),
            email: Set(email),
            phone: Set(phone),
            password_hash: Set(password_hash),
            ..Default::default()
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|err| AppError::from_write(err, || "User conflicts with stored data".to_string()))?;

        tracing::debug!(user_id = model.id, "user inserted");
        Ok(User::from(model))
    }

    async fn update(&self, id: i32, changes: UserChanges) -> AppResult<User> {
        let current: user::Model = self.find_model(id).await?.ok_or_not_found(id)?;
        if changes.is_empty() {
            return Ok(User::from(current));
        }

        let mut user = User::from(current.clone());
        user.apply(changes);

        let mut active: ActiveModel = current.into();
        active.name = Set(user.name);
        active.email = Set(user.email);
        active.phone = Set(user.phone);

        let model = active
            .update(&self.db)
            .await
            .map_err(|err| AppError::from_write(err, || format!("User {} conflicts with stored data", id)))?;
        Ok(User::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        self.find_model(id).await?.ok_or_not_found(id)?;

        let orders = OrderEntity::find()
            .filter(order::Column::ClientId.eq(id))
            .count(&self.db)
            .await?;
        if orders > 0 {
            return Err(AppError::integrity(format!(
                "Cannot delete user {}: it is still referenced by orders",
                id
            )));
        }

        // Orders inserted after the check are still caught by the foreign key
        let rows = self.delete_model(id).await.map_err(|err| {
            AppError::from_write(err, || {
                format!("Cannot delete user {}: it is still referenced by orders", id)
            })
        })?;

        if rows == 0 {
            return Err(AppError::NotFound(id));
        }

        tracing::debug!(user_id = id, "user deleted");
        Ok(())
    }

    async fn count(&self) -> AppResult<u64> {
        UserEntity::find().count(&self.db).await.map_err(Into::into)
    }
}
