//! User domain entity and related types.

use serde::Serialize;
use utoipa::ToSchema;

use crate::types::Patch;

/// Customer account. Equality is by id.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}

impl User {
    /// Apply a partial update; fields left unset keep their value.
    pub fn apply(&mut self, changes: UserChanges) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(email) = changes.email {
            self.email = email;
        }
        changes.phone.apply_to(&mut self.phone);
    }
}

/// User creation data, before an id is assigned
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Plain text, hashed before it reaches the store
    pub password: String,
}

/// Partial update of a user.
///
/// `name` and `email` cannot be cleared, so `None` means "keep".
/// `phone` is nullable and uses [`Patch`] to tell "keep" from "clear".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Patch<String>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_unchanged()
    }
}

/// User representation returned to clients (never carries the password)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Maria Brown")]
    pub name: String,
    #[schema(example = "maria@gmail.com")]
    pub email: String,
    #[schema(example = "988888888")]
    pub phone: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
        }
    }
}
