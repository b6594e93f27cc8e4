//! Product database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Category, Product};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub price: Decimal,
    pub img_url: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::order_item::Entity")]
    OrderItem,
}

impl Related<super::order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItem.def()
    }
}

/// Many-to-many through `product_categories`
impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        super::product_category::Relation::Category.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::product_category::Relation::Product.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Build the domain product from its row and linked categories
    pub fn into_product(self, mut categories: Vec<super::category::Model>) -> Product {
        categories.sort_by_key(|category| category.id);
        Product {
            id: self.id,
            name: self.name,
            description: self.description,
            price: self.price,
            img_url: self.img_url,
            categories: categories.into_iter().map(Category::from).collect(),
        }
    }
}
