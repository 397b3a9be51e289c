use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::row::Value;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Customer {
    pub customer_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Customer {
    pub const TABLE: &'static str = "customers";
    pub const COLUMNS: &'static [&'static str] = &[
        "customer_id",
        "first_name",
        "last_name",
        "email",
        "phone",
        "address",
        "city",
        "state",
        "zip_code",
        "country",
        "created_at",
        "updated_at",
    ];

    pub fn to_row(&self) -> Vec<Value> {
        vec![
            Value::Int(self.customer_id),
            Value::Text(self.first_name.clone()),
            Value::Text(self.last_name.clone()),
            Value::Text(self.email.clone()),
            Value::Text(self.phone.clone()),
            Value::Text(self.address.clone()),
            Value::Text(self.city.clone()),
            Value::Text(self.state.clone()),
            Value::Text(self.zip_code.clone()),
            Value::Text(self.country.clone()),
            Value::Timestamp(self.created_at),
            Value::Timestamp(self.updated_at),
        ]
    }
}
