use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::row::Value;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub order_id: i64,
    pub customer_id: i64,
    pub order_date: NaiveDateTime,
    pub total_amount: f64,
    pub status: String,
    pub shipping_address: String,
    pub shipping_city: String,
    pub shipping_state: String,
    pub shipping_zip: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Order {
    pub const TABLE: &'static str = "orders";
    pub const COLUMNS: &'static [&'static str] = &[
        "order_id",
        "customer_id",
        "order_date",
        "total_amount",
        "status",
        "shipping_address",
        "shipping_city",
        "shipping_state",
        "shipping_zip",
        "created_at",
        "updated_at",
    ];

    pub fn to_row(&self) -> Vec<Value> {
        vec![
            Value::Int(self.order_id),
            Value::Int(self.customer_id),
            Value::Timestamp(self.order_date),
            Value::Float(self.total_amount),
            Value::Text(self.status.clone()),
            Value::Text(self.shipping_address.clone()),
            Value::Text(self.shipping_city.clone()),
            Value::Text(self.shipping_state.clone()),
            Value::Text(self.shipping_zip.clone()),
            Value::Timestamp(self.created_at),
            Value::Timestamp(self.updated_at),
        ]
    }
}
