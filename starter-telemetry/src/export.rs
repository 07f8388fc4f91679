//! OTLP/HTTP trace export.
//!
//! Spans are sent to `<base>/otel/v1/traces` with basic auth derived from the
//! project API key. The exporter sits behind a simple span processor, so each
//! span is shipped as soon as it ends.

use crate::TelemetryError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use opentelemetry::KeyValue;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::Resource;
use opentelemetry_sdk::trace::{Tracer, TracerProvider};
use std::collections::HashMap;
use std::sync::OnceLock;

pub const DEFAULT_TRACE_BASE_URL: &str = "http://localhost:4318";
pub const DEFAULT_SERVICE_NAME: &str = "agent-starter";

const TRACER_NAME: &str = "starter-agent";

const OTEL_TRACES_ENDPOINT_VAR: &str = "OTEL_EXPORTER_OTLP_TRACES_ENDPOINT";
const OTEL_ENDPOINT_VAR: &str = "OTEL_EXPORTER_OTLP_ENDPOINT";

static INSTALLED: OnceLock<TracerProvider> = OnceLock::new();

#[derive(Clone)]
pub struct TraceExportConfig {
    api_key: String,
    project_id: String,
    base_url: String,
    service_name: String,
}

impl TraceExportConfig {
    /// Fails with [`TelemetryError::MissingApiKey`] when `api_key` is blank.
    pub fn new(
        api_key: impl Into<String>,
        project_id: impl Into<String>,
    ) -> Result<Self, TelemetryError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(TelemetryError::MissingApiKey);
        }
        Ok(Self {
            api_key,
            project_id: project_id.into(),
            base_url: DEFAULT_TRACE_BASE_URL.to_string(),
            service_name: DEFAULT_SERVICE_NAME.to_string(),
        })
    }

    /// Reads `TRACE_API_KEY`, `TRACE_PROJECT_ID` and `TRACE_BASE_URL`.
    pub fn from_env() -> Result<Self, TelemetryError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, TelemetryError> {
        let config = Self::new(
            lookup("TRACE_API_KEY").unwrap_or_default(),
            lookup("TRACE_PROJECT_ID").unwrap_or_default(),
        )?;
        Ok(match lookup("TRACE_BASE_URL").filter(|v| !v.trim().is_empty()) {
            Some(base_url) => config.with_base_url(base_url),
            None => config,
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_service_name(mut self, service_name: impl Into<String>) -> Self {
        self.service_name = service_name.into();
        self
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// `Basic base64("api:<key>")`
    pub fn auth_header(&self) -> String {
        format!("Basic {}", STANDARD.encode(format!("api:{}", self.api_key)))
    }

    pub fn headers(&self) -> HashMap<String, String> {
        HashMap::from([
            ("Authorization".to_string(), self.auth_header()),
            ("project_id".to_string(), self.project_id.clone()),
        ])
    }

    /// Full URL spans are posted to, before `OTEL_EXPORTER_OTLP_*` overrides.
    pub fn endpoint_url(&self) -> String {
        format!("{}/v1/traces", self.exporter_base())
    }

    // The HTTP exporter appends `/v1/traces` itself.
    fn exporter_base(&self) -> String {
        format!("{}/otel", self.base_url)
    }

    /// Endpoint after the exporter's environment overrides are applied.
    pub(crate) fn resolved_endpoint_url(&self, lookup: impl Fn(&str) -> Option<String>) -> String {
        let set = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(endpoint) = set(OTEL_TRACES_ENDPOINT_VAR) {
            return endpoint;
        }
        if let Some(base) = set(OTEL_ENDPOINT_VAR) {
            return format!("{}/v1/traces", base.trim_end_matches('/'));
        }
        self.endpoint_url()
    }
}

impl std::fmt::Debug for TraceExportConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TraceExportConfig")
            .field("api_key", &"<redacted>")
            .field("project_id", &self.project_id)
            .field("base_url", &self.base_url)
            .field("service_name", &self.service_name)
            .finish()
    }
}

/// Handle to the installed tracer provider.
///
/// Holding the handle keeps the provider alive; tracers only keep a weak reference.
#[derive(Clone)]
pub struct TraceExport {
    provider: TracerProvider,
    endpoint_url: String,
    service_name: String,
}

impl TraceExport {
    /// Build the exporter and register it as the process-wide tracer provider.
    ///
    /// Only the first install succeeds. Later calls return
    /// [`TelemetryError::AlreadyInstalled`] and leave the first provider active.
    /// Safe to call from inside an async runtime.
    pub fn install(config: TraceExportConfig) -> Result<Self, TelemetryError> {
        if INSTALLED.get().is_some() {
            return Err(TelemetryError::AlreadyInstalled);
        }

        // The blocking HTTP client panics if created or dropped on a runtime thread.
        let exporter_base = config.exporter_base();
        let headers = config.headers();
        let exporter = std::thread::spawn(move || {
            opentelemetry_otlp::new_exporter()
                .http()
                .with_endpoint(exporter_base)
                .with_headers(headers)
                .build_span_exporter()
        })
        .join()
        .map_err(|_| TelemetryError::ExporterThread)??;

        let provider = TracerProvider::builder()
            .with_simple_exporter(exporter)
            .with_config(opentelemetry_sdk::trace::config().with_resource(Resource::new(vec![
                KeyValue::new("service.name", config.service_name.clone()),
            ])))
            .build();

        INSTALLED.set(provider.clone()).map_err(|_| TelemetryError::AlreadyInstalled)?;
        opentelemetry::global::set_tracer_provider(provider.clone());

        let endpoint_url = config.resolved_endpoint_url(|key| std::env::var(key).ok());
        if endpoint_url != config.endpoint_url() {
            tracing::warn!(
                configured = %config.endpoint_url(),
                otlp.endpoint = %endpoint_url,
                "OTEL_EXPORTER_OTLP_* overrides the configured trace endpoint"
            );
        }
        tracing::info!(
            service.name = %config.service_name,
            otlp.endpoint = %endpoint_url,
            project_id = %config.project_id,
            "Trace export installed"
        );

        Ok(Self { provider, endpoint_url, service_name: config.service_name })
    }

    pub fn tracer(&self) -> Tracer {
        self.provider.tracer(TRACER_NAME)
    }

    /// URL spans are actually posted to.
    ///
    /// `OTEL_EXPORTER_OTLP_TRACES_ENDPOINT` (used as-is) or `OTEL_EXPORTER_OTLP_ENDPOINT`
    /// (plus `/v1/traces`) take precedence over the configured base URL.
    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Block until every finished span has been handed to the exporter.
    pub fn force_flush(&self) -> Result<(), TelemetryError> {
        self.provider.force_flush().into_iter().collect::<Result<Vec<_>, _>>()?;
        Ok(())
    }
}

impl std::fmt::Debug for TraceExport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TraceExport")
            .field("endpoint_url", &self.endpoint_url)
            .field("service_name", &self.service_name)
            .finish_non_exhaustive()
    }
}

pub fn is_trace_export_installed() -> bool {
    INSTALLED.get().is_some()
}

/// Flush pending spans and swap the global tracer provider for a no-op.
///
/// The installed provider and its exporter thread live until the process exits,
/// so [`TraceExport`] handles keep exporting and a second install still fails.
pub fn shutdown_telemetry() {
    if let Some(provider) = INSTALLED.get() {
        for result in provider.force_flush() {
            if let Err(e) = result {
                tracing::warn!(error = %e, "failed to flush spans during shutdown");
            }
        }
    }
    opentelemetry::global::shutdown_tracer_provider();
}
