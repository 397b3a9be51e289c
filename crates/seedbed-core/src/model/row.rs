use chrono::NaiveDateTime;

/// A single generated cell, kept backend-neutral so the same dataset can be
/// bound over a wire connection or rendered as literal SQL for a shell client.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
    Timestamp(NaiveDateTime),
}

/// All generated rows for one table, in insert order.
#[derive(Debug, Clone)]
pub struct TableRows {
    pub table: &'static str,
    pub columns: &'static [&'static str],
    pub rows: Vec<Vec<Value>>,
}
