//! Orders, their items and payment.
//!
//! An [`Order`] owns its items and its optional [`Payment`]; it embeds a
//! copy of the client and of each product instead of holding pointers back
//! into other aggregates. The order total is derived on read and never
//! stored.

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use super::{Product, User, UserResponse};
use crate::errors::{AppError, AppResult};
use crate::types::timestamp;

/// Order lifecycle states and their persisted codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    WaitingPayment,
    Paid,
    Shipped,
    Delivered,
    Canceled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::WaitingPayment,
        OrderStatus::Paid,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Canceled,
    ];

    /// Numeric code stored in the `orders.status` column
    pub fn code(self) -> i32 {
        match self {
            OrderStatus::WaitingPayment => 1,
            OrderStatus::Paid => 2,
            OrderStatus::Shipped => 3,
            OrderStatus::Delivered => 4,
            OrderStatus::Canceled => 5,
        }
    }

    /// Look a status up by code.
    ///
    /// # Errors
    /// [`AppError::InvalidOrderStatus`] for codes outside 1..=5.
    pub fn from_code(code: i32) -> AppResult<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.code() == code)
            .ok_or(AppError::InvalidOrderStatus(code))
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrderStatus::WaitingPayment => "WAITING_PAYMENT",
            OrderStatus::Paid => "PAID",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Canceled => "CANCELED",
        };
        f.write_str(label)
    }
}

/// Identity of an order line: one row per (order, product) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrderItemKey {
    pub order_id: i32,
    pub product_id: i32,
}

impl OrderItemKey {
    pub fn new(order_id: i32, product_id: i32) -> Self {
        Self {
            order_id,
            product_id,
        }
    }
}

impl fmt::Display for OrderItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.order_id, self.product_id)
    }
}

/// Order line with the unit price charged at sale time
#[derive(Debug, Clone)]
pub struct OrderItem {
    pub order_id: i32,
    pub product: Product,
    pub quantity: i32,
    pub price: Decimal,
}

impl OrderItem {
    pub fn key(&self) -> OrderItemKey {
        OrderItemKey::new(self.order_id, self.product.id)
    }

    /// `price × quantity`
    pub fn subtotal(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

impl PartialEq for OrderItem {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for OrderItem {}

/// Payment of an order; shares the order's id.
#[derive(Debug, Clone, Copy)]
pub struct Payment {
    pub order_id: i32,
    pub moment: DateTime<Utc>,
}

impl PartialEq for Payment {
    fn eq(&self, other: &Self) -> bool {
        self.order_id == other.order_id
    }
}

impl Eq for Payment {}

/// Purchase placed by a client. Equality is by id.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: i32,
    pub moment: DateTime<Utc>,
    pub status: OrderStatus,
    pub client: User,
    items: Vec<OrderItem>,
    payment: Option<Payment>,
}

impl Order {
    /// Build an order from its persisted status code.
    ///
    /// # Errors
    /// Fails with [`AppError::InvalidOrderStatus`] if `status_code` is not
    /// one of the known codes.
    pub fn new(id: i32, moment: DateTime<Utc>, status_code: i32, client: User) -> AppResult<Self> {
        Ok(Self {
            id,
            moment,
            status: OrderStatus::from_code(status_code)?,
            client,
            items: Vec::new(),
            payment: None,
        })
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn payment(&self) -> Option<&Payment> {
        self.payment.as_ref()
    }

    pub fn item(&self, key: OrderItemKey) -> Option<&OrderItem> {
        self.items.iter().find(|item| item.key() == key)
    }

    /// Attach a line.
    ///
    /// # Errors
    /// Rejects lines belonging to another order and a second line for the
    /// same product.
    pub fn add_item(&mut self, item: OrderItem) -> AppResult<()> {
        if item.order_id != self.id {
            return Err(AppError::validation(format!(
                "Item {} does not belong to order {}",
                item.key(),
                self.id
            )));
        }
        if self.item(item.key()).is_some() {
            return Err(AppError::integrity(format!(
                "Order item {} already exists",
                item.key()
            )));
        }
        self.items.push(item);
        Ok(())
    }

    /// Attach the payment, which must carry this order's id.
    pub fn set_payment(&mut self, payment: Payment) -> AppResult<()> {
        if payment.order_id != self.id {
            return Err(AppError::validation(format!(
                "Payment {} does not belong to order {}",
                payment.order_id, self.id
            )));
        }
        self.payment = Some(payment);
        Ok(())
    }

    /// Sum of item subtotals; zero for an order without items.
    pub fn total(&self) -> Decimal {
        self.items.iter().map(OrderItem::subtotal).sum()
    }
}

impl PartialEq for Order {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Order {}

/// Order line as returned to clients
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemResponse {
    #[schema(example = 2)]
    pub quantity: i32,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 90.5)]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 181.0)]
    pub sub_total: Decimal,
    pub product: Product,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        Self {
            quantity: item.quantity,
            price: item.price,
            sub_total: item.subtotal(),
            product: item.product,
        }
    }
}

/// Payment as returned to clients
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PaymentResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[serde(serialize_with = "timestamp::serialize")]
    #[schema(value_type = String, example = "2019-06-20T21:53:07Z")]
    pub moment: DateTime<Utc>,
}

impl From<Payment> for PaymentResponse {
    fn from(payment: Payment) -> Self {
        Self {
            id: payment.order_id,
            moment: payment.moment,
        }
    }
}

/// Order as returned to clients, with the derived total
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[serde(serialize_with = "timestamp::serialize")]
    #[schema(value_type = String, example = "2019-06-20T19:53:07Z")]
    pub moment: DateTime<Utc>,
    pub order_status: OrderStatus,
    pub client: UserResponse,
    pub items: Vec<OrderItemResponse>,
    pub payment: Option<PaymentResponse>,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 1431.0)]
    pub total: Decimal,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        let total = order.total();
        Self {
            id: order.id,
            moment: order.moment,
            order_status: order.status,
            client: UserResponse::from(order.client),
            items: order.items.into_iter().map(OrderItemResponse::from).collect(),
            payment: order.payment.map(PaymentResponse::from),
            total,
        }
    }
}
