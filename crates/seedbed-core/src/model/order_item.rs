use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::row::Value;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderItem {
    pub order_item_id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub unit_price: f64,
    pub total_price: f64,
    pub created_at: NaiveDateTime,
}

impl OrderItem {
    pub const TABLE: &'static str = "order_items";
    pub const COLUMNS: &'static [&'static str] = &[
        "order_item_id",
        "order_id",
        "product_id",
        "quantity",
        "unit_price",
        "total_price",
        "created_at",
    ];

    pub fn to_row(&self) -> Vec<Value> {
        vec![
            Value::Int(self.order_item_id),
            Value::Int(self.order_id),
            Value::Int(self.product_id),
            Value::Int(self.quantity),
            Value::Float(self.unit_price),
            Value::Float(self.total_price),
            Value::Timestamp(self.created_at),
        ]
    }
}
