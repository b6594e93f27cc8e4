//! Product category.

use serde::Serialize;
use utoipa::ToSchema;

/// Catalog category. Products link to categories through a join table;
/// the category itself holds no back references.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Category {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Electronics")]
    pub name: String,
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Category {}
