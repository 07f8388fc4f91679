//! Span helpers for agent, model, and tool operations.
//!
//! These feed the log subscriber only. Exported OpenTelemetry spans reuse the
//! names below but are emitted through an injected [`TraceExport`](crate::TraceExport).

use tracing::Span;

pub const AGENT_RUN: &str = "agent.run";
pub const MODEL_CALL: &str = "model.call";
pub const TOOL_EXECUTE: &str = "tool.execute";

/// Create a span for agent execution
///
/// ```
/// use starter_telemetry::agent_run_span;
/// let span = agent_run_span("chatai_agent", "inv-123");
/// let _enter = span.enter();
/// ```
pub fn agent_run_span(agent_name: &str, invocation_id: &str) -> Span {
    tracing::info_span!(
        "agent.run",
        agent.name = agent_name,
        invocation.id = invocation_id
    )
}

pub fn model_call_span(model_name: &str) -> Span {
    tracing::info_span!("model.call", model.name = model_name)
}

pub fn tool_execute_span(tool_name: &str) -> Span {
    tracing::info_span!("tool.execute", tool.name = tool_name)
}
