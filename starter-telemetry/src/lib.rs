//! # starter-telemetry
//!
//! Logging and trace export for bootstrapped agents.
//!
//! - [`init_telemetry`] - console logging via `tracing-subscriber`
//! - [`TraceExportConfig`] / [`TraceExport`] - OTLP/HTTP span export, installed once per process
//! - span helpers shared by the agent execution path
//!
//! ```no_run
//! use starter_telemetry::{TraceExport, TraceExportConfig};
//!
//! let config = TraceExportConfig::from_env()?;
//! let export = TraceExport::install(config)?;
//! // hand `export` to LlmAgentBuilder::trace_export
//! # Ok::<(), starter_telemetry::TelemetryError>(())
//! ```

mod error;
pub mod export;
pub mod init;
pub mod spans;

pub use error::TelemetryError;
pub use export::{
    DEFAULT_TRACE_BASE_URL, TraceExport, TraceExportConfig, is_trace_export_installed,
    shutdown_telemetry,
};
pub use init::init_telemetry;
pub use spans::{agent_run_span, model_call_span, tool_execute_span};

// Span attributes and contexts for dependent crates.
pub use opentelemetry;
