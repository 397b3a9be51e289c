use std::sync::Arc;

use seedbed_core::config::{RunOptions, SeedSpec};
use seedbed_core::docker::ContainerRuntime;
use seedbed_core::engine::find_profile;
use seedbed_core::errors::SetupError;
use seedbed_core::pipeline::{RunReport, SeedPipeline};
use tempfile::TempDir;

/// Connection URL for a throwaway SQLite database under `dir`.
pub fn sqlite_url(dir: &TempDir) -> String {
    format!("sqlite://{}?mode=rwc", dir.path().join("seed.db").display())
}

pub fn runtime() -> Arc<ContainerRuntime> {
    Arc::new(ContainerRuntime::new("docker"))
}

/// A dataset small enough to keep the hermetic tests quick.
pub fn small_spec() -> SeedSpec {
    SeedSpec {
        customers: 12,
        products: 6,
        orders: 20,
        max_items_per_order: 3,
    }
}

pub fn sqlite_options(url: &str, spec: SeedSpec, seed: u64) -> RunOptions {
    RunOptions {
        spec,
        batch_size: 5,
        seed: Some(seed),
        url: Some(url.to_string()),
        ..RunOptions::default()
    }
}

/// Runs the full pipeline against the embedded sqlite profile, which needs
/// no container runtime.
pub async fn seed_sqlite(url: &str, spec: SeedSpec, seed: u64) -> Result<RunReport, SetupError> {
    let profile = find_profile("sqlite").unwrap();
    SeedPipeline::new(profile, sqlite_options(url, spec, seed), runtime())
        .run()
        .await
}
