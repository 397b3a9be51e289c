use std::time::Duration;

/// How many rows to generate for each entity. Children reference only
/// parents generated in the same run.
#[derive(Debug, Clone, Copy)]
pub struct SeedSpec {
    pub customers: u32,
    pub products: u32,
    pub orders: u32,
    pub max_items_per_order: u32,
}

impl Default for SeedSpec {
    fn default() -> Self {
        Self {
            customers: 50,
            products: 20,
            orders: 100,
            max_items_per_order: 3,
        }
    }
}

/// Bounded readiness probing: a fixed number of attempts separated by a
/// fixed delay. There is no backoff growth.
#[derive(Debug, Clone, Copy)]
pub struct Polling {
    pub attempts: u32,
    pub delay: Duration,
}

impl Polling {
    pub fn new(attempts: u32, delay_secs: u64) -> Self {
        Self {
            attempts,
            delay: Duration::from_secs(delay_secs),
        }
    }
}

/// Everything one seeding run needs beyond the engine profile itself.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub spec: SeedSpec,
    pub batch_size: usize,
    pub seed: Option<u64>,
    /// Overrides the engine's catalog polling defaults when set.
    pub polling: Option<Polling>,
    /// Overrides the engine's connection URL (wire engines only).
    pub url: Option<String>,
    /// When false, the run targets an already running instance and never
    /// touches the container runtime.
    pub manage_container: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            spec: SeedSpec::default(),
            batch_size: 50,
            seed: None,
            polling: None,
            url: None,
            manage_container: true,
        }
    }
}
