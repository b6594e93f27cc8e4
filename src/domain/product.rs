//! Catalog product.

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use super::Category;

/// Product as listed in the catalog.
///
/// `price` is the current catalog price; order items keep their own
/// price-at-sale and may diverge from it.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[schema(example = 3)]
    pub id: i32,
    #[schema(example = "Macbook Pro")]
    pub name: String,
    #[schema(example = "Nam eleifend maximus tortor, at mollis.")]
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 1250.0)]
    pub price: Decimal,
    #[schema(example = "")]
    pub img_url: String,
    pub categories: Vec<Category>,
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Product {}
