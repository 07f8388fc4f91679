// Kept as the only test in this binary: trace export installation is process-global.

use futures::StreamExt;
use starter_agent::{LlmAgentBuilder, SimpleInvocationContext};
use starter_core::{Agent, Content, LlmResponse};
use starter_model::MockLlm;
use starter_telemetry::{TraceExport, TraceExportConfig};
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test(flavor = "multi_thread")]
async fn traced_run_posts_spans_to_collector() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/otel/v1/traces"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let config = TraceExportConfig::new("abc", "proj-1").unwrap().with_base_url(server.uri());
    let export = TraceExport::install(config).unwrap();
    assert_eq!(export.endpoint_url(), format!("{}/otel/v1/traces", server.uri()));

    let mock =
        MockLlm::new("mock").with_response(LlmResponse::new(Content::new("model").with_text("Hi!")));
    let agent = LlmAgentBuilder::new("chatai_agent")
        .instruction("You are a helpful agent who can chat with the user.")
        .model(Arc::new(mock))
        .trace_export(export.clone())
        .build()
        .unwrap();
    assert!(agent.is_traced());

    let ctx = Arc::new(SimpleInvocationContext::from_text("hello"));
    let events: Vec<_> = agent.run(ctx).await.unwrap().collect().await;
    assert_eq!(events.len(), 1);
    assert!(events[0].is_ok());

    tokio::task::spawn_blocking(move || export.force_flush()).await.unwrap().unwrap();

    // agent.run and model.call, one export each.
    let requests = server.received_requests().await.unwrap();
    assert!(requests.len() >= 2, "expected at least 2 exports, got {}", requests.len());
    for request in &requests {
        assert_eq!(request.url.path(), "/otel/v1/traces");
        assert_eq!(request.headers.get("authorization").unwrap(), "Basic YXBpOmFiYw==");
        assert_eq!(request.headers.get("project_id").unwrap(), "proj-1");
        assert!(!request.body.is_empty());
    }
}
