//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion, and reach the repositories through the
//! Unit of Work.

mod category_service;
pub mod container;
mod order_service;
mod product_service;
mod user_service;

#[cfg(test)]
mod test_support;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use category_service::{CategoryManager, CategoryService};
pub use order_service::{OrderManager, OrderService};
pub use product_service::{ProductManager, ProductService};
pub use user_service::{UserManager, UserService};
