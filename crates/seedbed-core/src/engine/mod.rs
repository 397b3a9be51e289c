mod catalog;
mod ddl;
mod render;
mod shell;
mod wire;

pub use self::catalog::{catalog, find_profile};
pub use self::shell::ShellAdapter;
pub use self::wire::WireAdapter;

use std::sync::Arc;

use crate::abstract_trait::DynEngineAdapter;
use crate::config::Polling;
use crate::docker::ContainerRuntime;

/// SQL dialect an engine speaks; drives DDL selection and, for shell
/// engines, literal rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Postgres,
    Sqlite,
    Cassandra,
    Mssql,
    ClickHouse,
    Firebird,
}

impl Dialect {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Postgres => "postgres",
            Dialect::Sqlite => "sqlite",
            Dialect::Cassandra => "cassandra",
            Dialect::Mssql => "mssql",
            Dialect::ClickHouse => "clickhouse",
            Dialect::Firebird => "firebird",
        }
    }
}

/// How `docker run` is invoked for an engine.
#[derive(Debug, Clone)]
pub struct ContainerSpec {
    pub name: String,
    pub image: String,
    /// host, container
    pub ports: Vec<(u16, u16)>,
    pub env: Vec<(String, String)>,
    /// Arguments appended after the image name.
    pub args: Vec<String>,
}

/// How statements reach the engine once the container is up.
#[derive(Debug, Clone)]
pub enum ConnectSpec {
    /// sqlx drives the engine's native protocol.
    Wire { url: String },
    /// Statements run through the client bundled in the engine's image.
    Shell(ShellSpec),
}

#[derive(Debug, Clone)]
pub struct ShellSpec {
    /// Container the client runs in. Kept separate from `ContainerSpec` so
    /// `--no-container` runs can still reach a previously launched engine.
    pub container: String,
    pub program: String,
    pub base_args: Vec<String>,
    pub input: InputMode,
    /// Prepended to table names in rendered INSERTs, e.g. `ecommerce.dbo.`.
    pub table_prefix: Option<String>,
}

/// How a statement is handed to the shell client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Passed as the value of a flag, e.g. `-e <statement>`.
    Flag(&'static str),
    /// Piped to the client's stdin.
    Stdin,
}

#[derive(Debug, Clone)]
pub struct EngineProfile {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub summary: &'static str,
    pub dialect: Dialect,
    pub container: Option<ContainerSpec>,
    pub polling: Polling,
    pub probe: String,
    pub ddl: Vec<String>,
    pub connect: ConnectSpec,
}

impl EngineProfile {
    pub fn transport(&self) -> &'static str {
        match self.connect {
            ConnectSpec::Wire { .. } => "wire",
            ConnectSpec::Shell(_) => "shell",
        }
    }

    /// One-line hint printed at the end of a successful run.
    pub fn connect_hint(&self) -> String {
        match &self.connect {
            ConnectSpec::Wire { url } => format!("connect with: {url}"),
            ConnectSpec::Shell(spec) => {
                format!("connect with: docker exec -it {} {}", spec.container, spec.program)
            }
        }
    }
}

/// Builds the statement channel for a profile. Wire adapters connect lazily,
/// so this never blocks on an engine that is still starting.
pub fn build_adapter(
    profile: &EngineProfile,
    runtime: Arc<ContainerRuntime>,
    url_override: Option<&str>,
) -> DynEngineAdapter {
    match &profile.connect {
        ConnectSpec::Wire { url } => {
            let url = url_override.unwrap_or(url);
            Arc::new(WireAdapter::new(url))
        }
        ConnectSpec::Shell(spec) => {
            Arc::new(ShellAdapter::new(runtime, spec.clone(), profile.dialect))
        }
    }
}
