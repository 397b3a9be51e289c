use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn};

use crate::abstract_trait::EngineAdapterTrait;
use crate::config::RunOptions;
use crate::docker::ContainerRuntime;
use crate::engine::{EngineProfile, build_adapter};
use crate::errors::SetupError;
use crate::generator::SeedGenerator;
use crate::loader::BulkLoader;
use crate::model::TableRows;
use crate::probe;

#[derive(Debug, Clone)]
pub struct TableReport {
    pub table: String,
    pub generated: usize,
    /// Row count read back from the engine; `None` over shell channels.
    pub counted: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub engine: String,
    pub tables: Vec<TableReport>,
    pub rows_loaded: u64,
    pub elapsed: Duration,
}

/// The linear run: launch container, wait for readiness, apply schema,
/// generate, load, verify. Each phase must finish before the next starts,
/// and every failure aborts the remainder.
pub struct SeedPipeline {
    profile: EngineProfile,
    options: RunOptions,
    runtime: Arc<ContainerRuntime>,
}

impl SeedPipeline {
    pub fn new(profile: EngineProfile, options: RunOptions, runtime: Arc<ContainerRuntime>) -> Self {
        Self {
            profile,
            options,
            runtime,
        }
    }

    pub async fn run(&self) -> Result<RunReport, SetupError> {
        let started = Instant::now();
        info!("🚀 Seeding {} ({})", self.profile.name, self.profile.transport());

        if self.options.manage_container {
            if let Some(spec) = &self.profile.container {
                self.runtime.remove_if_present(&spec.name).await;
                self.runtime
                    .launch(spec)
                    .await
                    .map_err(SetupError::Container)?;
            }
        }

        let adapter = build_adapter(&self.profile, self.runtime.clone(), self.options.url.as_deref());
        let polling = self.options.polling.unwrap_or(self.profile.polling);
        probe::wait_until_ready(adapter.as_ref(), self.profile.name, &self.profile.probe, polling)
            .await?;

        apply_schema(adapter.as_ref(), &self.profile.ddl).await?;

        let mut generator =
            SeedGenerator::new(self.options.seed).map_err(|err| SetupError::Seed(err.to_string()))?;
        let dataset = generator.generate(&self.options.spec);
        let tables = dataset.tables();
        info!(
            "🎲 Generated {} rows across {} tables",
            dataset.total_rows(),
            tables.len()
        );

        let loader = BulkLoader::new(self.options.batch_size);
        let rows_loaded = loader.load(adapter.as_ref(), &tables).await?;

        let reports = verify(adapter.as_ref(), &tables).await?;
        adapter.close().await;

        let elapsed = started.elapsed();
        info!(
            "✅ {} seeded: {rows_loaded} rows in {:.1}s",
            self.profile.name,
            elapsed.as_secs_f64()
        );

        Ok(RunReport {
            engine: self.profile.name.to_string(),
            tables: reports,
            rows_loaded,
            elapsed,
        })
    }
}

/// Applies the catalog's DDL in order. Statements are existence-guarded, so
/// re-running against partial state is safe; any failure is fatal.
pub async fn apply_schema(
    adapter: &dyn EngineAdapterTrait,
    statements: &[String],
) -> Result<(), SetupError> {
    for (index, statement) in statements.iter().enumerate() {
        adapter
            .execute(statement)
            .await
            .map_err(|source| SetupError::Schema { index, source })?;
    }
    info!("✅ Applied {} schema statements", statements.len());
    Ok(())
}

async fn verify(
    adapter: &dyn EngineAdapterTrait,
    tables: &[TableRows],
) -> Result<Vec<TableReport>, SetupError> {
    let mut reports = Vec::with_capacity(tables.len());
    for table in tables {
        let counted = adapter
            .count_rows(table.table)
            .await
            .map_err(SetupError::Verify)?;

        if let Some(count) = counted {
            if count < table.rows.len() as i64 {
                warn!(
                    "⚠️ {} holds {count} rows but {} were loaded",
                    table.table,
                    table.rows.len()
                );
            }
        }

        reports.push(TableReport {
            table: table.table.to_string(),
            generated: table.rows.len(),
            counted,
        });
    }
    Ok(reports)
}
