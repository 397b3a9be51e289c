use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use super::render;
use super::{Dialect, InputMode, ShellSpec};
use crate::abstract_trait::EngineAdapterTrait;
use crate::docker::{ContainerRuntime, ensure_success};
use crate::errors::ExecError;
use crate::model::Value;

/// Adapter for engines driven through the client bundled in their own image:
/// every statement becomes one `docker exec` of that client.
pub struct ShellAdapter {
    runtime: Arc<ContainerRuntime>,
    spec: ShellSpec,
    dialect: Dialect,
}

impl ShellAdapter {
    pub fn new(runtime: Arc<ContainerRuntime>, spec: ShellSpec, dialect: Dialect) -> Self {
        Self {
            runtime,
            spec,
            dialect,
        }
    }

    async fn run_client(&self, statement: &str) -> Result<(), ExecError> {
        let mut client_args = self.spec.base_args.clone();
        let stdin = match self.spec.input {
            InputMode::Flag(flag) => {
                client_args.push(flag.to_string());
                client_args.push(statement.to_string());
                None
            }
            InputMode::Stdin => Some(statement),
        };

        debug!("{} <- {} bytes", self.spec.program, statement.len());
        let output = self
            .runtime
            .exec(&self.spec.container, &self.spec.program, &client_args, stdin)
            .await?;
        ensure_success(output)?;
        Ok(())
    }
}

#[async_trait]
impl EngineAdapterTrait for ShellAdapter {
    async fn execute(&self, statement: &str) -> Result<(), ExecError> {
        self.run_client(statement).await
    }

    async fn insert_batch(
        &self,
        table: &str,
        columns: &[&str],
        rows: &[Vec<Value>],
    ) -> Result<u64, ExecError> {
        if rows.is_empty() {
            return Ok(0);
        }

        let statement = render::batch_statement(
            self.dialect,
            self.spec.table_prefix.as_deref(),
            table,
            columns,
            rows,
        );
        self.run_client(&statement).await?;
        Ok(rows.len() as u64)
    }

    /// Shell clients print results to stdout in client-specific shapes, so
    /// counts are not read back through them.
    async fn count_rows(&self, _table: &str) -> Result<Option<i64>, ExecError> {
        Ok(None)
    }

    async fn close(&self) {}
}
