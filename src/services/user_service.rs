//! User service - Handles user-related business logic.
//!
//! The only service with write operations. Passwords are hashed here,
//! before they reach the store.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{NewUser, Password, User, UserChanges};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List every user
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Get a user, failing with `NotFound` when absent
    async fn find_by_id(&self, id: i32) -> AppResult<User>;

    /// Store a new user and return it with its assigned id
    async fn insert(&self, user: NewUser) -> AppResult<User>;

    /// Overwrite the provided fields of an existing user
    async fn update(&self, id: i32, changes: UserChanges) -> AppResult<User>;

    /// Delete a user that no order references
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of UserService using Unit of Work.
pub struct UserManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> UserManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> UserService for UserManager<U> {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        self.uow.users().list().await
    }

    async fn find_by_id(&self, id: i32) -> AppResult<User> {
        self.uow.users().find_by_id(id).await?.ok_or_not_found(id)
    }

    async fn insert(&self, user: NewUser) -> AppResult<User> {
        let password_hash = Password::new(&user.password)?.into_string();
        let created = self
            .uow
            .users()
            .create(user.name, user.email, user.phone, password_hash)
            .await?;

        tracing::info!(user_id = created.id, "user created");
        Ok(created)
    }

    async fn update(&self, id: i32, changes: UserChanges) -> AppResult<User> {
        self.uow.users().update(id, changes).await
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        self.uow.users().delete(id).await?;
        tracing::info!(user_id = id, "user deleted");
        Ok(())
    }
}
