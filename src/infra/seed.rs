//! Demo catalog used by `seed` and by `serve` when `SEED_DEMO_DATA` is set.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ConnectionTrait, Set};

use super::repositories::entities::{
    category, order, order_item, payment, product, product_category, user,
};
use crate::domain::{OrderStatus, Password};
use crate::errors::{AppError, AppResult};

const CATEGORIES: [&str; 3] = ["Electronics", "Books", "Computers"];

/// (name, description, price in cents, category indexes)
const PRODUCTS: [(&str, &str, i64, &[usize]); 5] = [
    ("The Lord of the Rings", "Lorem ipsum dolor sit amet, consectetur.", 9050, &[1]),
    ("Smart TV", "Nulla eu imperdiet purus. Maecenas ante.", 219000, &[0, 2]),
    ("Macbook Pro", "Nam eleifend maximus tortor, at mollis.", 125000, &[2]),
    ("PC Gamer", "Donec aliquet odio ac rhoncus cursus.", 120000, &[2]),
    ("Rails for Dummies", "Cras fringilla convallis sem vel faucibus.", 10099, &[1]),
];

/// (name, email, phone, password)
const USERS: [(&str, &str, &str, &str); 2] = [
    ("Maria Brown", "maria@gmail.com", "988888888", "123456"),
    ("Alex Green", "alex@gmail.com", "977777777", "123456"),
];

/// (moment, status, client index)
const ORDERS: [(&str, OrderStatus, usize); 3] = [
    ("2019-06-20T19:53:07Z", OrderStatus::Paid, 0),
    ("2019-07-21T03:42:10Z", OrderStatus::WaitingPayment, 1),
    ("2019-07-22T15:21:22Z", OrderStatus::WaitingPayment, 0),
];

/// (order index, product index, quantity); the price is copied from the product
const ORDER_ITEMS: [(usize, usize, i32); 4] = [(0, 0, 2), (0, 2, 1), (1, 2, 2), (2, 4, 2)];

/// (order index, moment)
const PAYMENTS: [(usize, &str); 1] = [(0, "2019-06-20T21:53:07Z")];

/// Row counts written by [`insert_demo_data`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub categories: usize,
    pub products: usize,
    pub users: usize,
    pub orders: usize,
    pub order_items: usize,
    pub payments: usize,
}

fn parse_moment(raw: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|moment| moment.with_timezone(&Utc))
        .map_err(|e| AppError::internal(format!("Invalid seed timestamp {}: {}", raw, e)))
}

/// Insert the demo catalog through `db`.
///
/// Run it inside a transaction so a failure leaves no partial data.
pub async fn insert_demo_data<C>(db: &C) -> AppResult<SeedSummary>
where
    C: ConnectionTrait,
{
    let mut summary = SeedSummary::default();

    let mut category_ids = Vec::with_capacity(CATEGORIES.len());
    for name in CATEGORIES {
        let model = category::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        }
        .insert(db)
        .await?;
        category_ids.push(model.id);
    }
    summary.categories = category_ids.len();

    let mut products = Vec::with_capacity(PRODUCTS.len());
    for (name, description, cents, categories) in PRODUCTS {
        let model = product::ActiveModel {
            name: Set(name.to_string()),
            description: Set(description.to_string()),
            price: Set(Decimal::new(cents, 2)),
            img_url: Set(String::new()),
            ..Default::default()
        }
        .insert(db)
        .await?;

        for &index in categories {
            product_category::ActiveModel {
                product_id: Set(model.id),
                category_id: Set(category_ids[index]),
            }
            .insert(db)
            .await?;
        }
        products.push(model);
    }
    summary.products = products.len();

    let mut user_ids = Vec::with_capacity(USERS.len());
    for (name, email, phone, password) in USERS {
        let password = Password::new(password)?;
        let model = user::ActiveModel {
            name: Set(name.to_string()),
            email: Set(email.to_string()),
            phone: Set(Some(phone.to_string())),
            password_hash: Set(password.into_string()),
            ..Default::default()
        }
        .insert(db)
        .await?;
        user_ids.push(model.id);
    }
    summary.users = user_ids.len();

    let mut order_ids = Vec::with_capacity(ORDERS.len());
    for (moment, status, client) in ORDERS {
        let model = order::ActiveModel {
            moment: Set(parse_moment(moment)?),
            status: Set(status.code()),
            client_id: Set(user_ids[client]),
            ..Default::default()
        }
        .insert(db)
        .await?;
        order_ids.push(model.id);
    }
    summary.orders = order_ids.len();

    for (order, product, quantity) in ORDER_ITEMS {
        order_item::ActiveModel {
            order_id: Set(order_ids[order]),
            product_id: Set(products[product].id),
            quantity: Set(quantity),
            price: Set(products[product].price),
        }
        .insert(db)
        .await?;
        summary.order_items += 1;
    }

    for (order, moment) in PAYMENTS {
        payment::ActiveModel {
            order_id: Set(order_ids[order]),
            moment: Set(parse_moment(moment)?),
        }
        .insert(db)
        .await?;
        summary.payments += 1;
    }

    tracing::info!(?summary, "demo data inserted");
    Ok(summary)
}
