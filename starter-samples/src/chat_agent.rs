//! Plain chat agent on an OpenAI-compatible endpoint.

use crate::settings::Settings;
use starter_agent::{LlmAgent, LlmAgentBuilder};
use starter_core::{Agent, AgentConfig, ModelBinding, Result};
use starter_telemetry::TraceExport;
use std::sync::Arc;

pub const NAME: &str = "chatai_agent";
/// One `openai/` prefix routes to the OpenAI-compatible adapter; the rest is the endpoint's model id.
pub const MODEL: &str = "openai/openai/gpt-oss-20b";
pub const DESCRIPTION: &str = "Agent to chat with.";
pub const INSTRUCTION: &str = "You are a helpful agent who can chat with the user.";

pub fn config(settings: &Settings) -> Result<AgentConfig> {
    AgentConfig::builder(NAME)
        .description(DESCRIPTION)
        .instruction(INSTRUCTION)
        .model(ModelBinding::custom_endpoint(
            MODEL,
            &settings.openai_api_base,
            &settings.openai_api_key,
        ))
        .build()
}

pub fn build(settings: &Settings, trace_export: Option<TraceExport>) -> Result<LlmAgent> {
    let mut builder = LlmAgentBuilder::from_config(config(settings)?);
    if let Some(export) = trace_export {
        builder = builder.trace_export(export);
    }
    builder.build()
}

/// The chat agent, configured from `.env` and the process environment.
pub fn root_agent() -> Result<Arc<dyn Agent>> {
    Ok(Arc::new(build(&Settings::load(), None)?))
}
