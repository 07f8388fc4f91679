use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use proptest::prelude::*;
use starter_telemetry::TraceExportConfig;

proptest! {
    #[test]
    fn auth_header_encodes_api_prefixed_key(key in "[A-Za-z0-9_\\-]{1,48}") {
        let header = TraceExportConfig::new(key.clone(), "proj").unwrap().auth_header();
        let encoded = header.strip_prefix("Basic ").unwrap();
        let decoded = String::from_utf8(STANDARD.decode(encoded).unwrap()).unwrap();
        prop_assert_eq!(decoded, format!("api:{key}"));
    }
}
