use opentelemetry::trace::TraceError;
use starter_core::StarterError;

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("trace export requires a non-empty API key (set TRACE_API_KEY)")]
    MissingApiKey,

    #[error("a trace exporter is already installed for this process")]
    AlreadyInstalled,

    #[error("trace exporter setup thread panicked")]
    ExporterThread,

    #[error("trace exporter error: {0}")]
    Exporter(#[from] TraceError),

    #[error("failed to initialize log subscriber: {0}")]
    Subscriber(String),
}

impl From<TelemetryError> for StarterError {
    fn from(err: TelemetryError) -> Self {
        StarterError::Telemetry(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_starter_error() {
        let err: StarterError = TelemetryError::AlreadyInstalled.into();
        assert!(matches!(err, StarterError::Telemetry(msg) if msg.contains("already installed")));
    }
}
