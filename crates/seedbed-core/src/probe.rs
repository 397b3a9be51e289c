use tracing::{info, warn};

use crate::abstract_trait::EngineAdapterTrait;
use crate::config::Polling;
use crate::errors::SetupError;

/// Probes the engine until it answers or the attempt budget is spent. The
/// delay between attempts is fixed; exhaustion is fatal.
pub async fn wait_until_ready(
    adapter: &dyn EngineAdapterTrait,
    engine: &str,
    probe: &str,
    polling: Polling,
) -> Result<(), SetupError> {
    for attempt in 1..=polling.attempts {
        match adapter.execute(probe).await {
            Ok(()) => {
                info!("✅ {engine} ready after {attempt} attempt(s)");
                return Ok(());
            }
            Err(err) => {
                warn!(
                    "⏳ {engine} not ready (attempt {attempt}/{}): {err}",
                    polling.attempts
                );
                if attempt < polling.attempts {
                    tokio::time::sleep(polling.delay).await;
                }
            }
        }
    }

    Err(SetupError::ReadinessTimeout {
        engine: engine.to_string(),
        attempts: polling.attempts,
    })
}
