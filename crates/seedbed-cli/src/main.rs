use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use seedbed_core::config::{Polling, RunOptions, SeedSpec};
use seedbed_core::docker::ContainerRuntime;
use seedbed_core::engine::{ConnectSpec, catalog, find_profile};
use seedbed_core::pipeline::SeedPipeline;
use seedbed_core::utils::init_logger;

#[derive(Parser)]
#[command(name = "seedctl")]
#[command(about = "Provision a disposable database engine and seed demo e-commerce data", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Launch an engine container, wait for readiness, apply schema, load data.
    Run(RunArgs),
    /// List the supported engines.
    Engines {
        /// Emit the catalog as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print the DDL an engine receives, in order.
    Schema {
        /// Engine name or alias (see `seedctl engines`).
        engine: String,
    },
}

#[derive(clap::Args)]
struct RunArgs {
    /// Engine name or alias (see `seedctl engines`).
    engine: String,
    /// Customers to generate.
    #[arg(long, default_value_t = 50)]
    customers: u32,
    /// Products to generate.
    #[arg(long, default_value_t = 20)]
    products: u32,
    /// Orders to generate.
    #[arg(long, default_value_t = 100)]
    orders: u32,
    /// Upper bound on line items per order.
    #[arg(long, default_value_t = 3)]
    max_items: u32,
    /// Rows per INSERT batch.
    #[arg(long, default_value_t = 50)]
    batch_size: usize,
    /// Fixed RNG seed for a reproducible dataset.
    #[arg(long)]
    seed: Option<u64>,
    /// Override the engine's readiness attempt budget.
    #[arg(long)]
    attempts: Option<u32>,
    /// Override the delay between readiness attempts, in seconds.
    #[arg(long)]
    delay_secs: Option<u64>,
    /// Connection URL override for wire engines.
    #[arg(long, env = "DATABASE_URL")]
    url: Option<String>,
    /// Do not remove or launch a container; the engine must already be reachable.
    #[arg(long, default_value_t = false)]
    no_container: bool,
    /// Container binary used for engine lifecycle and shell clients.
    #[arg(long, env = "SEEDBED_DOCKER_BIN", default_value = "docker")]
    docker: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    init_logger("seedctl");

    match cli.command {
        Command::Run(args) => run(args).await,
        Command::Engines { json } => engines(json),
        Command::Schema { engine } => schema(&engine),
    }
}

async fn run(args: RunArgs) -> Result<()> {
    let profile = find_profile(&args.engine)?;

    let polling = match (args.attempts, args.delay_secs) {
        (None, None) => None,
        (attempts, delay_secs) => Some(Polling {
            attempts: attempts.unwrap_or(profile.polling.attempts),
            delay: delay_secs
                .map(Duration::from_secs)
                .unwrap_or(profile.polling.delay),
        }),
    };

    let hint = match (&profile.connect, args.url.as_deref()) {
        (ConnectSpec::Wire { .. }, Some(url)) => format!("connect with: {url}"),
        _ => profile.connect_hint(),
    };

    let options = RunOptions {
        spec: SeedSpec {
            customers: args.customers,
            products: args.products,
            orders: args.orders,
            max_items_per_order: args.max_items,
        },
        batch_size: args.batch_size,
        seed: args.seed,
        polling,
        url: args.url,
        manage_container: !args.no_container,
    };

    let runtime = Arc::new(ContainerRuntime::new(args.docker));
    let report = SeedPipeline::new(profile, options, runtime)
        .run()
        .await
        .with_context(|| format!("Failed to seed {}", args.engine))?;

    println!();
    println!("{:<12} {:>10} {:>10}", "TABLE", "GENERATED", "COUNTED");
    for table in &report.tables {
        let counted = table
            .counted
            .map(|c| c.to_string())
            .unwrap_or_else(|| "n/a".to_string());
        println!("{:<12} {:>10} {:>10}", table.table, table.generated, counted);
    }
    println!();
    println!(
        "{} rows loaded into {} in {:.1}s",
        report.rows_loaded,
        report.engine,
        report.elapsed.as_secs_f64()
    );
    println!("{hint}");

    Ok(())
}

fn engines(json: bool) -> Result<()> {
    let profiles = catalog();

    if json {
        let entries: Vec<_> = profiles
            .iter()
            .map(|p| {
                serde_json::json!({
                    "name": p.name,
                    "aliases": p.aliases,
                    "summary": p.summary,
                    "dialect": p.dialect.as_str(),
                    "transport": p.transport(),
                    "image": p.container.as_ref().map(|c| c.image.as_str()),
                    "readiness": {
                        "attempts": p.polling.attempts,
                        "delay_secs": p.polling.delay.as_secs(),
                    },
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&entries).context("Failed to render engine catalog")?
        );
        return Ok(());
    }

    println!(
        "{:<12} {:<9} {:<44} {}",
        "ENGINE", "TRANSPORT", "IMAGE", "SUMMARY"
    );
    for p in &profiles {
        let image = p.container.as_ref().map(|c| c.image.as_str()).unwrap_or("-");
        println!(
            "{:<12} {:<9} {:<44} {}",
            p.name,
            p.transport(),
            image,
            p.summary
        );
    }

    Ok(())
}

fn schema(engine: &str) -> Result<()> {
    let profile = find_profile(engine)?;
    for statement in &profile.ddl {
        println!("{statement}");
        println!();
    }
    Ok(())
}
