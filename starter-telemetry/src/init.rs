//! Log subscriber initialization

use crate::TelemetryError;
use std::sync::Once;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Initialize console logging.
///
/// Honors `RUST_LOG`, defaulting to `info`. Later calls are no-ops.
///
/// # Example
/// ```
/// use starter_telemetry::init_telemetry;
/// init_telemetry("agent-starter").expect("Failed to initialize telemetry");
/// ```
pub fn init_telemetry(service_name: &str) -> Result<(), TelemetryError> {
    let mut result = Ok(());
    INIT.call_once(|| {
        result = install_subscriber(service_name);
    });
    result
}

fn install_subscriber(service_name: &str) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|e| TelemetryError::Subscriber(e.to_string()))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_line_number(true),
        )
        .try_init()
        .map_err(|e| TelemetryError::Subscriber(e.to_string()))?;

    tracing::info!(service.name = service_name, "Telemetry initialized");
    Ok(())
}
