use thiserror::Error;

use super::ExecError;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Unknown engine: {0}")]
    UnknownEngine(String),

    #[error("Container runtime error: {0}")]
    Container(#[source] ExecError),

    #[error("{engine} not ready after {attempts} attempts")]
    ReadinessTimeout { engine: String, attempts: u32 },

    #[error("Schema statement {index} failed: {source}")]
    Schema { index: usize, source: ExecError },

    #[error("Seeding failed: {0}")]
    Seed(String),

    #[error("Bulk load into {table} failed: {source}")]
    Load { table: String, source: ExecError },

    #[error("Row count verification failed: {0}")]
    Verify(#[source] ExecError),
}
