use futures::StreamExt;
use serde_json::json;
use starter_agent::{LlmAgentBuilder, MAX_TOOL_ROUNDS, SimpleInvocationContext};
use starter_core::{
    Agent, AgentConfig, Content, Event, LlmResponse, ModelBinding, Part, Result, StarterError,
};
use starter_model::MockLlm;
use starter_tool::{FunctionTool, google_search};
use std::sync::Arc;

fn call(name: &str, args: serde_json::Value, id: &str) -> LlmResponse {
    LlmResponse::new(Content {
        role: "model".to_string(),
        parts: vec![Part::FunctionCall { name: name.to_string(), args, id: Some(id.to_string()) }],
    })
}

async fn collect(agent: &dyn Agent, text: &str) -> Vec<Result<Event>> {
    let ctx = Arc::new(SimpleInvocationContext::from_text(text));
    agent.run(ctx).await.unwrap().collect().await
}

#[test]
fn build_without_key_makes_no_calls() {
    let agent = LlmAgentBuilder::new("chatai_agent")
        .description("Agent to chat with.")
        .instruction("You are a helpful agent who can chat with the user.")
        .model_binding(ModelBinding::custom_endpoint(
            "openai/openai/gpt-oss-20b",
            "http://127.0.0.1:9/v1",
            "",
        ))
        .build()
        .unwrap();

    assert_eq!(agent.name(), "chatai_agent");
    assert_eq!(agent.description(), "Agent to chat with.");
    assert_eq!(agent.model().name(), "openai/openai/gpt-oss-20b");
    assert!(agent.tools().is_empty());
    assert!(!agent.is_traced());
}

#[test]
fn build_rejects_missing_instruction_and_model() {
    let err = LlmAgentBuilder::new("a")
        .model_binding(ModelBinding::hosted("gemini-2.0-flash-exp"))
        .build()
        .unwrap_err();
    assert!(matches!(err, StarterError::Config(_)));

    let err = LlmAgentBuilder::new("a").instruction("x").build().unwrap_err();
    assert!(err.to_string().contains("requires a model"));
}

#[test]
fn build_rejects_duplicate_tools() {
    let err = LlmAgentBuilder::new("google_search_agent")
        .instruction("Answer the question using the Google Search tool.")
        .model(Arc::new(MockLlm::new("mock")))
        .tool(google_search())
        .tool(google_search())
        .build()
        .unwrap_err();
    assert!(err.to_string().contains("Duplicate tool name"));
}

#[test]
fn from_config_keeps_everything() {
    let config = AgentConfig::builder("google_search_agent")
        .description("Agent to answer questions using Google Search.")
        .instruction("Answer the question using the Google Search tool.")
        .model(ModelBinding::hosted("gemini-2.0-flash-exp"))
        .tool(google_search())
        .build()
        .unwrap();

    let agent = LlmAgentBuilder::from_config(config).build().unwrap();
    assert_eq!(agent.config().model(), &ModelBinding::hosted("gemini-2.0-flash-exp"));
    assert_eq!(agent.tools().names(), vec!["google_search"]);
    assert_eq!(agent.instruction(), "Answer the question using the Google Search tool.");
}

#[tokio::test]
async fn run_sends_instruction_and_declarations() {
    let mock = Arc::new(
        MockLlm::new("mock").with_response(LlmResponse::new(Content::new("model").with_text("Hi!"))),
    );
    let agent = LlmAgentBuilder::new("google_search_agent")
        .instruction("Answer the question using the Google Search tool.")
        .model(mock.clone())
        .tool(google_search())
        .build()
        .unwrap();

    let events = collect(&agent, "hello").await;
    assert_eq!(events.len(), 1);
    let event = events[0].as_ref().unwrap();
    assert_eq!(event.author, "google_search_agent");
    assert!(event.is_final_response());
    assert_eq!(event.content().unwrap().text(), "Hi!");

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].system_instruction.as_deref(),
        Some("Answer the question using the Google Search tool.")
    );
    assert_eq!(requests[0].tools.len(), 1);
    assert_eq!(requests[0].tools[0].name, "google_search");
    assert_eq!(requests[0].contents[0].text(), "hello");
}

#[tokio::test]
async fn run_executes_function_tools() {
    let mock = Arc::new(
        MockLlm::new("mock")
            .with_response(call("add", json!({"a": 2, "b": 3}), "call_1"))
            .with_response(LlmResponse::new(Content::new("model").with_text("5"))),
    );
    let add = FunctionTool::new("add", "Add two numbers", |_ctx, args| async move {
        let a = args["a"].as_i64().unwrap_or_default();
        let b = args["b"].as_i64().unwrap_or_default();
        Ok(json!({ "sum": a + b }))
    });

    let agent = LlmAgentBuilder::new("calc")
        .instruction("Use the add tool.")
        .model(mock.clone())
        .tool(Arc::new(add))
        .build()
        .unwrap();

    let events: Vec<Event> = collect(&agent, "2+3?").await.into_iter().map(|e| e.unwrap()).collect();
    assert_eq!(events.len(), 3);

    let response = events[1].content().unwrap();
    assert_eq!(response.role, "function");
    match &response.parts[0] {
        Part::FunctionResponse { function_response, id } => {
            assert_eq!(function_response.name, "add");
            assert_eq!(function_response.response["sum"], 5);
            assert_eq!(id.as_deref(), Some("call_1"));
        }
        other => panic!("unexpected part: {other:?}"),
    }
    assert_eq!(events[2].content().unwrap().text(), "5");

    let second = &mock.requests()[1];
    assert_eq!(second.contents.len(), 3);
    assert_eq!(second.contents[2].role, "function");
}

#[tokio::test]
async fn builtin_and_unknown_calls_answer_with_errors() {
    let mock = Arc::new(
        MockLlm::new("mock")
            .with_turn(vec![call("google_search", json!({}), "c1")])
            .with_turn(vec![call("missing", json!({}), "c2")])
            .with_response(LlmResponse::new(Content::new("model").with_text("done"))),
    );
    let agent = LlmAgentBuilder::new("google_search_agent")
        .instruction("Answer the question using the Google Search tool.")
        .model(mock)
        .tool(google_search())
        .build()
        .unwrap();

    let events: Vec<Event> = collect(&agent, "q").await.into_iter().map(|e| e.unwrap()).collect();
    let errors: Vec<String> = events
        .iter()
        .filter_map(|e| e.content())
        .filter(|c| c.role == "function")
        .map(|c| match &c.parts[0] {
            Part::FunctionResponse { function_response, .. } => {
                function_response.response["error"].as_str().unwrap_or_default().to_string()
            }
            _ => String::new(),
        })
        .collect();

    assert_eq!(errors.len(), 2);
    assert!(errors[0].contains("executed by the model backend"));
    assert!(errors[1].contains("Tool missing not found"));
}

#[tokio::test]
async fn model_errors_propagate() {
    let agent = LlmAgentBuilder::new("chatai_agent")
        .instruction("You are a helpful agent who can chat with the user.")
        .model(Arc::new(MockLlm::new("empty")))
        .build()
        .unwrap();

    let events = collect(&agent, "hello").await;
    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], Err(StarterError::Model(_))));
}

#[tokio::test]
async fn tool_rounds_are_bounded() {
    let mut mock = MockLlm::new("looping");
    for i in 0..=MAX_TOOL_ROUNDS {
        mock = mock.with_response(call("noop", json!({}), &format!("c{i}")));
    }
    let noop = FunctionTool::new("noop", "Does nothing", |_ctx, _args| async { Ok(json!({})) });

    let agent = LlmAgentBuilder::new("loop")
        .instruction("Loop forever.")
        .model(Arc::new(mock))
        .tool(Arc::new(noop))
        .build()
        .unwrap();

    let events = collect(&agent, "go").await;
    match events.last() {
        Some(Err(StarterError::Agent(msg))) => assert!(msg.contains("Max tool rounds")),
        other => panic!("expected round limit error, got {other:?}"),
    }
}
