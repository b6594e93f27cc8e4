//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod category;
pub mod order;
pub mod order_item;
pub mod payment;
pub mod product;
pub mod product_category;
pub mod user;

pub use category::Entity as CategoryEntity;
pub use order::Entity as OrderEntity;
pub use order_item::Entity as OrderItemEntity;
pub use payment::Entity as PaymentEntity;
pub use product::Entity as ProductEntity;
pub use product_category::Entity as ProductCategoryEntity;
pub use user::Entity as UserEntity;
