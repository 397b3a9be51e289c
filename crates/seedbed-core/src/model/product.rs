use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::row::Value;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub product_id: i64,
    pub product_name: String,
    pub category: String,
    pub brand: String,
    pub price: f64,
    pub cost: f64,
    pub stock_quantity: i64,
    pub description: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Product {
    pub const TABLE: &'static str = "products";
    pub const COLUMNS: &'static [&'static str] = &[
        "product_id",
        "product_name",
        "category",
        "brand",
        "price",
        "cost",
        "stock_quantity",
        "description",
        "created_at",
        "updated_at",
    ];

    pub fn to_row(&self) -> Vec<Value> {
        vec![
            Value::Int(self.product_id),
            Value::Text(self.product_name.clone()),
            Value::Text(self.category.clone()),
            Value::Text(self.brand.clone()),
            Value::Float(self.price),
            Value::Float(self.cost),
            Value::Int(self.stock_quantity),
            Value::Text(self.description.clone()),
            Value::Timestamp(self.created_at),
            Value::Timestamp(self.updated_at),
        ]
    }
}
