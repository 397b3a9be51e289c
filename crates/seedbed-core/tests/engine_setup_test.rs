mod common;

use std::time::Duration;

use common::{runtime, seed_sqlite, small_spec, sqlite_url};
use seedbed_core::config::{Polling, RunOptions};
use seedbed_core::docker::ContainerRuntime;
use seedbed_core::engine::{build_adapter, find_profile};
use seedbed_core::errors::SetupError;
use seedbed_core::pipeline::{SeedPipeline, apply_schema};
use serial_test::serial;
use tempfile::TempDir;

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn schema_reapply_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let url = sqlite_url(&dir);
    seed_sqlite(&url, small_spec(), 1).await.unwrap();

    let profile = find_profile("sqlite").unwrap();
    let adapter = build_adapter(&profile, runtime(), Some(&url));

    // the database is already fully seeded; the guarded DDL must not care
    apply_schema(adapter.as_ref(), &profile.ddl).await.unwrap();
    apply_schema(adapter.as_ref(), &profile.ddl).await.unwrap();
    adapter.close().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
async fn unreachable_engine_exhausts_the_probe_budget() {
    let profile = find_profile("postgres").unwrap();
    let options = RunOptions {
        url: Some("postgres://postgres@127.0.0.1:9/ecommerce".to_string()),
        polling: Some(Polling {
            attempts: 2,
            delay: Duration::from_millis(20),
        }),
        manage_container: false,
        ..RunOptions::default()
    };

    let err = SeedPipeline::new(profile, options, runtime())
        .run()
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        SetupError::ReadinessTimeout { attempts: 2, ref engine } if engine == "postgres"
    ));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 1)]
#[serial]
async fn container_binary_comes_from_the_environment() {
    unsafe { std::env::set_var("SEEDBED_DOCKER_BIN", "podman") };
    assert_eq!(ContainerRuntime::from_env().bin(), "podman");

    unsafe { std::env::remove_var("SEEDBED_DOCKER_BIN") };
    assert_eq!(ContainerRuntime::from_env().bin(), "docker");
}
