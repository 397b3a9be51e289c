use std::process::{Output, Stdio};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, info};

use crate::engine::ContainerSpec;
use crate::errors::ExecError;

/// Thin wrapper around the container CLI. `SEEDBED_DOCKER_BIN` swaps the
/// binary, so podman works unchanged.
pub struct ContainerRuntime {
    bin: String,
}

impl ContainerRuntime {
    pub fn new(bin: impl Into<String>) -> Self {
        Self { bin: bin.into() }
    }

    pub fn from_env() -> Self {
        Self::new(std::env::var("SEEDBED_DOCKER_BIN").unwrap_or_else(|_| "docker".to_string()))
    }

    pub fn bin(&self) -> &str {
        &self.bin
    }

    /// Stops and removes a leftover container with the same name. Both steps
    /// are best-effort; a missing container is the common case.
    pub async fn remove_if_present(&self, name: &str) {
        debug!("removing leftover container {name} if present");
        let _ = self.output(args(&["stop", name]), None).await;
        let _ = self.output(args(&["rm", "-f", name]), None).await;
    }

    /// `docker run -d` with the profile's ports, environment and arguments.
    pub async fn launch(&self, spec: &ContainerSpec) -> Result<(), ExecError> {
        let args = launch_args(spec);
        info!("🐳 {} run {}", self.bin, spec.image);
        let output = self.output(args, None).await?;
        ensure_success(output)?;
        Ok(())
    }

    /// Runs a client program inside the container, optionally piping a
    /// script to its stdin.
    pub async fn exec(
        &self,
        container: &str,
        program: &str,
        program_args: &[String],
        stdin: Option<&str>,
    ) -> Result<Output, ExecError> {
        let mut full = vec!["exec".to_string()];
        if stdin.is_some() {
            full.push("-i".to_string());
        }
        full.push(container.to_string());
        full.push(program.to_string());
        full.extend(program_args.iter().cloned());
        self.output(full, stdin).await
    }

    async fn output(&self, args: Vec<String>, stdin: Option<&str>) -> Result<Output, ExecError> {
        let mut command = Command::new(&self.bin);
        command
            .args(&args)
            .stdin(if stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = command.spawn()?;
        if let Some(script) = stdin {
            if let Some(mut handle) = child.stdin.take() {
                handle.write_all(script.as_bytes()).await?;
            }
        }
        let output = child.wait_with_output().await?;
        Ok(output)
    }
}

/// Fails with the client's captured stderr when the invocation exited
/// non-zero.
pub(crate) fn ensure_success(output: Output) -> Result<Output, ExecError> {
    if output.status.success() {
        Ok(output)
    } else {
        Err(ExecError::Client {
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn launch_args(spec: &ContainerSpec) -> Vec<String> {
    let mut args = vec![
        "run".to_string(),
        "-d".to_string(),
        "--name".to_string(),
        spec.name.clone(),
    ];
    for (host, container) in &spec.ports {
        args.push("-p".to_string());
        args.push(format!("{host}:{container}"));
    }
    for (key, value) in &spec.env {
        args.push("-e".to_string());
        args.push(format!("{key}={value}"));
    }
    args.push(spec.image.clone());
    args.extend(spec.args.iter().cloned());
    args
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launch_args_cover_ports_env_and_command() {
        let spec = ContainerSpec {
            name: "seedbed-cockroach".to_string(),
            image: "cockroachdb/cockroach:latest".to_string(),
            ports: vec![(26257, 26257), (8080, 8080)],
            env: vec![("COCKROACH_USER".to_string(), "root".to_string())],
            args: vec!["start-single-node".to_string(), "--insecure".to_string()],
        };

        let args = launch_args(&spec);
        assert_eq!(args[0..4], ["run", "-d", "--name", "seedbed-cockroach"]);
        assert!(args.windows(2).any(|w| w[0] == "-p" && w[1] == "26257:26257"));
        assert!(args.windows(2).any(|w| w[0] == "-e" && w[1] == "COCKROACH_USER=root"));

        let image_at = args.iter().position(|a| a == "cockroachdb/cockroach:latest").unwrap();
        assert_eq!(args[image_at + 1..], ["start-single-node", "--insecure"]);
    }

    #[test]
    fn env_override_picks_the_binary() {
        let runtime = ContainerRuntime::new("podman");
        assert_eq!(runtime.bin(), "podman");
    }
}
