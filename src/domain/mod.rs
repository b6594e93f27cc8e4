//! Domain layer - Core business entities and logic
//!
//! Plain records for the order-management model. Relationships are
//! one-directional: orders own items and payment, products carry their
//! categories, and reverse lookups go through foreign keys in the
//! infrastructure layer.

pub mod category;
pub mod order;
pub mod password;
pub mod product;
pub mod user;

pub use category::Category;
pub use order::{
    Order, OrderItem, OrderItemKey, OrderItemResponse, OrderResponse, OrderStatus, Payment,
    PaymentResponse,
};
pub use password::Password;
pub use product::Product;
pub use user::{NewUser, User, UserChanges, UserResponse};
