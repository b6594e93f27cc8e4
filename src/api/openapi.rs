//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{category_handler, order_handler, product_handler, user_handler};
use crate::domain::{
    Category, OrderItemResponse, OrderResponse, OrderStatus, PaymentResponse, Product,
    UserResponse,
};
use crate::errors::StandardError;

/// OpenAPI documentation for the order management API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Order API",
        version = "0.1.0",
        description = "Order management REST API: users, product catalog and orders",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // User endpoints
        user_handler::list_users,
        user_handler::get_user,
        user_handler::create_user,
        user_handler::update_user,
        user_handler::delete_user,
        // Catalog endpoints
        category_handler::list_categories,
        category_handler::get_category,
        product_handler::list_products,
        product_handler::get_product,
        // Order endpoints
        order_handler::list_orders,
        order_handler::get_order,
    ),
    components(
        schemas(
            UserResponse,
            user_handler::CreateUserRequest,
            user_handler::UpdateUserRequest,
            Category,
            Product,
            OrderStatus,
            OrderItemResponse,
            PaymentResponse,
            OrderResponse,
            StandardError,
        )
    ),
    tags(
        (name = "Users", description = "User management operations"),
        (name = "Categories", description = "Product categories"),
        (name = "Products", description = "Product catalog"),
        (name = "Orders", description = "Orders with items and payment")
    )
)]
pub struct ApiDoc;
