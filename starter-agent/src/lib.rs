//! # starter-agent
//!
//! [`LlmAgent`] turns an [`AgentConfig`](starter_core::AgentConfig) into a runnable agent.
//!
//! Building never touches the network: the model binding is resolved into a
//! client, and a missing API key only shows up when the model is first called.
//! A [`TraceExport`](starter_telemetry::TraceExport) handle can be injected so
//! runs emit `agent.run`, `model.call` and `tool.execute` spans.

mod context;
mod llm_agent;
mod trace;

pub use context::SimpleInvocationContext;
pub use llm_agent::{LlmAgent, LlmAgentBuilder, MAX_TOOL_ROUNDS};
