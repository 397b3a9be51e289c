use tracing::info;

use crate::abstract_trait::EngineAdapterTrait;
use crate::errors::SetupError;
use crate::model::TableRows;

/// Splits each table's rows into fixed-size batches and submits every batch
/// as a single insert. Any failed batch aborts the whole load.
pub struct BulkLoader {
    batch_size: usize,
}

impl BulkLoader {
    pub fn new(batch_size: usize) -> Self {
        Self {
            batch_size: batch_size.max(1),
        }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Number of batches a table of `rows` rows will need.
    pub fn batches(&self, rows: usize) -> usize {
        rows.div_ceil(self.batch_size)
    }

    pub async fn load(
        &self,
        adapter: &dyn EngineAdapterTrait,
        tables: &[TableRows],
    ) -> Result<u64, SetupError> {
        let mut total = 0u64;
        for table in tables {
            let mut loaded = 0u64;
            for chunk in table.rows.chunks(self.batch_size) {
                loaded += adapter
                    .insert_batch(table.table, table.columns, chunk)
                    .await
                    .map_err(|source| SetupError::Load {
                        table: table.table.to_string(),
                        source,
                    })?;
            }
            info!(
                "✅ Loaded {loaded} rows into {} in {} batch(es)",
                table.table,
                self.batches(table.rows.len())
            );
            total += loaded;
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ExecError;
    use crate::model::Value;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[test]
    fn batch_math_covers_edges() {
        let loader = BulkLoader::new(50);
        assert_eq!(loader.batches(0), 0);
        assert_eq!(loader.batches(1), 1);
        assert_eq!(loader.batches(50), 1);
        assert_eq!(loader.batches(51), 2);
        assert_eq!(loader.batches(101), 3);
    }

    #[test]
    fn zero_batch_size_is_clamped() {
        assert_eq!(BulkLoader::new(0).batch_size(), 1);
    }

    #[derive(Default)]
    struct RecordingAdapter {
        batches: Mutex<Vec<(String, usize)>>,
        fail_on_table: Option<&'static str>,
    }

    #[async_trait]
    impl EngineAdapterTrait for RecordingAdapter {
        async fn execute(&self, _statement: &str) -> Result<(), ExecError> {
            Ok(())
        }

        async fn insert_batch(
            &self,
            table: &str,
            _columns: &[&str],
            rows: &[Vec<Value>],
        ) -> Result<u64, ExecError> {
            if self.fail_on_table == Some(table) {
                return Err(ExecError::UnsupportedUrl("boom".to_string()));
            }
            self.batches
                .lock()
                .unwrap()
                .push((table.to_string(), rows.len()));
            Ok(rows.len() as u64)
        }

        async fn count_rows(&self, _table: &str) -> Result<Option<i64>, ExecError> {
            Ok(None)
        }

        async fn close(&self) {}
    }

    fn rows(count: usize) -> Vec<Vec<Value>> {
        (0..count).map(|i| vec![Value::Int(i as i64)]).collect()
    }

    #[tokio::test]
    async fn partitions_rows_into_fixed_batches() {
        let adapter = RecordingAdapter::default();
        let tables = vec![TableRows {
            table: "customers",
            columns: &["customer_id"],
            rows: rows(101),
        }];

        let total = BulkLoader::new(50).load(&adapter, &tables).await.unwrap();
        assert_eq!(total, 101);

        let batches = adapter.batches.lock().unwrap();
        let sizes: Vec<usize> = batches.iter().map(|(_, n)| *n).collect();
        assert_eq!(sizes, vec![50, 50, 1]);
    }

    #[tokio::test]
    async fn a_failed_batch_aborts_the_load() {
        let adapter = RecordingAdapter {
            fail_on_table: Some("orders"),
            ..Default::default()
        };
        let tables = vec![
            TableRows {
                table: "customers",
                columns: &["customer_id"],
                rows: rows(3),
            },
            TableRows {
                table: "orders",
                columns: &["order_id"],
                rows: rows(3),
            },
        ];

        let err = BulkLoader::new(2).load(&adapter, &tables).await.unwrap_err();
        assert!(matches!(err, SetupError::Load { ref table, .. } if table == "orders"));

        // customers made it in before the abort, orders never recorded
        let batches = adapter.batches.lock().unwrap();
        assert!(batches.iter().all(|(t, _)| t == "customers"));
        assert_eq!(batches.len(), 2);
    }
}
