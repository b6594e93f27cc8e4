//! Order repository implementation.
//!
//! An order is assembled from several tables: its row, the client, the
//! items with their products, and the optional payment. Each related
//! table is fetched once per call, not once per order.

use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, LoaderTrait, QueryFilter,
    QueryOrder,
};

use super::base::BaseRepository;
use super::entities::{
    order, product, OrderEntity, OrderItemEntity, PaymentEntity, ProductEntity, UserEntity,
};
use super::product_repository::with_categories;
use crate::domain::{Order, OrderItem, Payment, Product, User};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Read access to orders.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// List orders with client, items and payment, ordered by id
    async fn list(&self) -> AppResult<Vec<Order>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Order>>;
}

pub struct OrderStore {
    db: DatabaseConnection,
}

impl OrderStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl BaseRepository<OrderEntity> for OrderStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

/// Load the products referenced by order lines, keyed by id.
async fn load_products<C>(ids: BTreeSet<i32>, db: &C) -> AppResult<HashMap<i32, Product>>
where
    C: ConnectionTrait,
{
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let models = ProductEntity::find()
        .filter(product::Column::Id.is_in(ids))
        .order_by_asc(product::Column::Id)
        .all(db)
        .await?;

    Ok(with_categories(models, db)
        .await?
        .into_iter()
        .map(|product| (product.id, product))
        .collect())
}

/// Build domain orders from order rows, keeping the row order.
async fn assemble<C>(models: Vec<order::Model>, db: &C) -> AppResult<Vec<Order>>
where
    C: ConnectionTrait,
{
    if models.is_empty() {
        return Ok(Vec::new());
    }

    let clients = models.load_one(UserEntity, db).await?;
    let items = models.load_many(OrderItemEntity, db).await?;
    let payments = models.load_one(PaymentEntity, db).await?;

    let product_ids = items.iter().flatten().map(|item| item.product_id).collect();
    let products = load_products(product_ids, db).await?;

    models
        .into_iter()
        .zip(clients)
        .zip(items)
        .zip(payments)
        .map(|(((model, client), mut items), payment)| -> AppResult<Order> {
            let client = client.ok_or_else(|| {
                AppError::internal(format!("Order {} references a missing client", model.id))
            })?;
            let mut order = Order::new(model.id, model.moment, model.status, User::from(client))
                .map_err(|err| match err {
                    AppError::InvalidOrderStatus(code) => AppError::internal(format!(
                        "Order {} is stored with unknown status code {}",
                        model.id, code
                    )),
                    other => other,
                })?;

            items.sort_by_key(|item| item.product_id);
            for item in items {
                let product = products.get(&item.product_id).cloned().ok_or_else(|| {
                    AppError::internal(format!(
                        "Order item {} references a missing product",
                        item.key()
                    ))
                })?;
                order.add_item(OrderItem {
                    order_id: item.order_id,
                    product,
                    quantity: item.quantity,
                    price: item.price,
                })?;
            }

            if let Some(payment) = payment {
                order.set_payment(Payment::from(payment))?;
            }
            Ok(order)
        })
        .collect()
}

#[async_trait]
impl OrderRepository for OrderStore {
    async fn list(&self) -> AppResult<Vec<Order>> {
        let models = self.find_all_models().await?;
        assemble(models, &self.db).await
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Order>> {
        let Some(model) = self.find_model(id).await? else {
            return Ok(None);
        };
        Ok(assemble(vec![model], &self.db).await?.pop())
    }
}
