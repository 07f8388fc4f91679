// Kept as the only test in this binary: installation is process-global.

use starter_telemetry::{TelemetryError, TraceExport, TraceExportConfig, is_trace_export_installed};

#[test]
fn second_install_is_rejected() {
    assert!(!is_trace_export_installed());

    let config = TraceExportConfig::new("abc", "proj-1")
        .unwrap()
        .with_base_url("http://127.0.0.1:9")
        .with_service_name("install-test");
    let export = TraceExport::install(config.clone()).unwrap();
    assert_eq!(export.endpoint_url(), "http://127.0.0.1:9/otel/v1/traces");
    assert_eq!(export.service_name(), "install-test");
    assert!(is_trace_export_installed());

    let err = TraceExport::install(config).unwrap_err();
    assert!(matches!(err, TelemetryError::AlreadyInstalled));
    assert!(is_trace_export_installed());

    let _tracer = export.tracer();
    export.force_flush().unwrap();
}
