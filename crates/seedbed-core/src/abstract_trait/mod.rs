use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::ExecError;
use crate::model::Value;

pub type DynEngineAdapter = Arc<dyn EngineAdapterTrait + Send + Sync>;

/// One statement-execution channel into a database engine, either a native
/// wire connection or a client invoked inside the engine's own container.
#[async_trait]
pub trait EngineAdapterTrait: Send + Sync {
    /// Runs a single statement, discarding any result rows. Also serves as
    /// the readiness probe.
    async fn execute(&self, statement: &str) -> Result<(), ExecError>;

    /// Inserts one batch of rows and reports how many the engine accepted.
    async fn insert_batch(
        &self,
        table: &str,
        columns: &[&str],
        rows: &[Vec<Value>],
    ) -> Result<u64, ExecError>;

    /// Row count for a table, or `None` when the channel cannot read results
    /// back (shell clients).
    async fn count_rows(&self, table: &str) -> Result<Option<i64>, ExecError>;

    async fn close(&self);
}
