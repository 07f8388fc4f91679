//! Hosted Gemini agent grounded with Google Search.

use starter_agent::{LlmAgent, LlmAgentBuilder};
use starter_core::{Agent, AgentConfig, ModelBinding, Result};
use starter_telemetry::TraceExport;
use starter_tool::google_search;
use std::sync::Arc;

pub const NAME: &str = "google_search_agent";
pub const MODEL: &str = "gemini-2.0-flash-exp";
pub const DESCRIPTION: &str = "Agent to answer questions using Google Search.";
pub const INSTRUCTION: &str = "Answer the question using the Google Search tool.";

pub fn config() -> Result<AgentConfig> {
    AgentConfig::builder(NAME)
        .description(DESCRIPTION)
        .instruction(INSTRUCTION)
        .model(ModelBinding::hosted(MODEL))
        .tool(google_search())
        .build()
}

pub fn build(trace_export: Option<TraceExport>) -> Result<LlmAgent> {
    let mut builder = LlmAgentBuilder::from_config(config()?);
    if let Some(export) = trace_export {
        builder = builder.trace_export(export);
    }
    builder.build()
}

/// The search agent. The hosted key is read from `GOOGLE_API_KEY` or `GEMINI_API_KEY`.
pub fn root_agent() -> Result<Arc<dyn Agent>> {
    crate::settings::load_dotenv();
    Ok(Arc::new(build(None)?))
}
