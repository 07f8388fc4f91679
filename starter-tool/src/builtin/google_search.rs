use async_trait::async_trait;
use serde_json::Value;
use starter_core::{Result, StarterError, Tool, ToolContext, ToolKind};
use std::sync::Arc;

/// Google Search grounding, run by the hosted model itself.
///
/// Declared to the model on every request. Nothing happens locally: if a call
/// reaches [`Tool::execute`] the backend handed it back, which is an error.
#[derive(Debug, Default, Clone, Copy)]
pub struct GoogleSearchTool;

impl GoogleSearchTool {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Tool for GoogleSearchTool {
    fn name(&self) -> &str {
        "google_search"
    }

    fn description(&self) -> &str {
        "Performs a Google search to retrieve information from the web."
    }

    fn kind(&self) -> ToolKind {
        ToolKind::Builtin
    }

    async fn execute(&self, ctx: Arc<dyn ToolContext>, _args: Value) -> Result<Value> {
        tracing::warn!(agent = ctx.agent_name(), "google_search reached local execution");
        Err(StarterError::Tool("google_search is executed by the model backend".to_string()))
    }
}

/// Shared instance, ready to hand to an agent.
pub fn google_search() -> Arc<dyn Tool> {
    Arc::new(GoogleSearchTool)
}
