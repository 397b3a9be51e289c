//! Renders generated rows as literal SQL for engines driven through a
//! container shell client, where nothing can be bound.

use chrono::NaiveDateTime;

use super::Dialect;
use crate::model::Value;

pub fn literal(dialect: Dialect, value: &Value) -> String {
    match value {
        Value::Int(v) => v.to_string(),
        Value::Float(v) => format!("{v:.2}"),
        Value::Text(v) => format!("'{}'", v.replace('\'', "''")),
        Value::Timestamp(ts) => timestamp_literal(dialect, ts),
    }
}

fn timestamp_literal(dialect: Dialect, ts: &NaiveDateTime) -> String {
    // sqlcmd parses ISO 8601 with the T separator regardless of the server
    // locale; everything else takes the plain space-separated form.
    let format = match dialect {
        Dialect::Mssql => "%Y-%m-%dT%H:%M:%S",
        _ => "%Y-%m-%d %H:%M:%S",
    };
    format!("'{}'", ts.format(format))
}

fn row_tuple(dialect: Dialect, row: &[Value]) -> String {
    let rendered: Vec<String> = row.iter().map(|v| literal(dialect, v)).collect();
    format!("({})", rendered.join(", "))
}

pub fn qualified_table(prefix: Option<&str>, table: &str) -> String {
    match prefix {
        Some(prefix) => format!("{prefix}{table}"),
        None => table.to_string(),
    }
}

/// One batch as a single client invocation: a multi-row INSERT for most
/// dialects, a CQL batch for Cassandra, and an INSERT-per-row script ending
/// in COMMIT for Firebird's isql.
pub fn batch_statement(
    dialect: Dialect,
    prefix: Option<&str>,
    table: &str,
    columns: &[&str],
    rows: &[Vec<Value>],
) -> String {
    let target = qualified_table(prefix, table);
    let column_list = columns.join(", ");

    match dialect {
        Dialect::Cassandra => {
            let mut statement = String::from("BEGIN UNLOGGED BATCH\n");
            for row in rows {
                statement.push_str(&format!(
                    "INSERT INTO {target} ({column_list}) VALUES {};\n",
                    row_tuple(dialect, row)
                ));
            }
            statement.push_str("APPLY BATCH;");
            statement
        }
        Dialect::Firebird => {
            let mut statement = String::new();
            for row in rows {
                statement.push_str(&format!(
                    "INSERT INTO {target} ({column_list}) VALUES {};\n",
                    row_tuple(dialect, row)
                ));
            }
            statement.push_str("COMMIT;");
            statement
        }
        _ => {
            let tuples: Vec<String> = rows.iter().map(|row| row_tuple(dialect, row)).collect();
            format!(
                "INSERT INTO {target} ({column_list}) VALUES\n{};",
                tuples.join(",\n")
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(14, 30, 5)
            .unwrap()
    }

    #[test]
    fn text_literals_escape_embedded_quotes() {
        let value = Value::Text("O'Brien's".to_string());
        assert_eq!(literal(Dialect::Cassandra, &value), "'O''Brien''s'");
    }

    #[test]
    fn floats_render_with_two_decimals() {
        assert_eq!(literal(Dialect::ClickHouse, &Value::Float(12.5)), "12.50");
        assert_eq!(literal(Dialect::ClickHouse, &Value::Float(99.0)), "99.00");
    }

    #[test]
    fn timestamps_follow_the_dialect() {
        let value = Value::Timestamp(ts());
        assert_eq!(literal(Dialect::Mssql, &value), "'2024-03-07T14:30:05'");
        assert_eq!(literal(Dialect::Cassandra, &value), "'2024-03-07 14:30:05'");
        assert_eq!(literal(Dialect::Firebird, &value), "'2024-03-07 14:30:05'");
    }

    fn sample_rows() -> Vec<Vec<Value>> {
        vec![
            vec![Value::Int(1), Value::Text("a".to_string())],
            vec![Value::Int(2), Value::Text("b".to_string())],
        ]
    }

    #[test]
    fn multi_row_insert_for_mssql() {
        let statement = batch_statement(
            Dialect::Mssql,
            Some("ecommerce.dbo."),
            "customers",
            &["customer_id", "first_name"],
            &sample_rows(),
        );
        assert!(statement.starts_with("INSERT INTO ecommerce.dbo.customers (customer_id, first_name) VALUES"));
        assert!(statement.contains("(1, 'a')"));
        assert!(statement.contains("(2, 'b')"));
        assert_eq!(statement.matches("INSERT INTO").count(), 1);
    }

    #[test]
    fn cassandra_wraps_rows_in_a_batch() {
        let statement = batch_statement(
            Dialect::Cassandra,
            Some("ecommerce."),
            "customers",
            &["customer_id", "first_name"],
            &sample_rows(),
        );
        assert!(statement.starts_with("BEGIN UNLOGGED BATCH"));
        assert!(statement.ends_with("APPLY BATCH;"));
        assert_eq!(statement.matches("INSERT INTO ecommerce.customers").count(), 2);
    }

    #[test]
    fn firebird_script_commits_at_the_end() {
        let statement = batch_statement(
            Dialect::Firebird,
            None,
            "customers",
            &["customer_id", "first_name"],
            &sample_rows(),
        );
        assert_eq!(statement.matches("INSERT INTO customers").count(), 2);
        assert!(statement.ends_with("COMMIT;"));
    }

    #[test]
    fn unprefixed_tables_render_bare() {
        assert_eq!(qualified_table(None, "orders"), "orders");
        assert_eq!(qualified_table(Some("ecommerce."), "orders"), "ecommerce.orders");
    }
}
