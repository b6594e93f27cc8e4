//! Order handlers (read-only).

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::AppState;
use crate::domain::OrderResponse;
use crate::errors::AppResult;

pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders))
        .route("/:id", get(get_order))
}

/// List all orders with items, payment and total
#[utoipa::path(
    get,
    path = "/orders",
    tag = "Orders",
    responses(
        (status = 200, description = "List of orders", body = Vec<OrderResponse>)
    )
)]
pub async fn list_orders(State(state): State<AppState>) -> AppResult<Json<Vec<OrderResponse>>> {
    let orders = state.order_service.find_all().await?;
    Ok(Json(orders.into_iter().map(OrderResponse::from).collect()))
}

/// Get order by ID
#[utoipa::path(
    get,
    path = "/orders/{id}",
    tag = "Orders",
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order found", body = OrderResponse),
        (status = 404, description = "Order not found", body = crate::errors::StandardError)
    )
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<OrderResponse>> {
    let order = state.order_service.find_by_id(id).await?;
    Ok(Json(OrderResponse::from(order)))
}
