use crate::{ModelBinding, Result, StarterError, Tool, ToolSet};
use std::sync::Arc;

/// Everything needed to stand up one agent.
///
/// Built once through [`AgentConfigBuilder`] and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    name: String,
    description: String,
    instruction: String,
    model: ModelBinding,
    tools: ToolSet,
}

impl AgentConfig {
    pub fn builder(name: impl Into<String>) -> AgentConfigBuilder {
        AgentConfigBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn instruction(&self) -> &str {
        &self.instruction
    }

    pub fn model(&self) -> &ModelBinding {
        &self.model
    }

    pub fn tools(&self) -> &ToolSet {
        &self.tools
    }
}

pub struct AgentConfigBuilder {
    name: String,
    description: Option<String>,
    instruction: Option<String>,
    model: Option<ModelBinding>,
    tools: Vec<Arc<dyn Tool>>,
}

impl AgentConfigBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), description: None, instruction: None, model: None, tools: Vec::new() }
    }

    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = Some(instruction.into());
        self
    }

    pub fn model(mut self, model: ModelBinding) -> Self {
        self.model = Some(model);
        self
    }

    pub fn tool(mut self, tool: Arc<dyn Tool>) -> Self {
        self.tools.push(tool);
        self
    }

    pub fn tools(mut self, tools: impl IntoIterator<Item = Arc<dyn Tool>>) -> Self {
        self.tools.extend(tools);
        self
    }

    /// Validates shape only. API keys are not checked here.
    pub fn build(self) -> Result<AgentConfig> {
        if self.name.trim().is_empty() {
            return Err(StarterError::Config("Agent name must not be empty".to_string()));
        }

        let instruction = self.instruction.unwrap_or_default();
        if instruction.trim().is_empty() {
            return Err(StarterError::Config(format!(
                "Agent '{}' requires a non-empty instruction",
                self.name
            )));
        }

        let model = self
            .model
            .ok_or_else(|| StarterError::Config(format!("Agent '{}' requires a model", self.name)))?;

        Ok(AgentConfig {
            name: self.name,
            description: self.description.unwrap_or_default(),
            instruction,
            model,
            tools: ToolSet::try_from(self.tools)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_minimal_config() {
        let config = AgentConfig::builder("chatai_agent")
            .instruction("You are a helpful agent who can chat with the user.")
            .model(ModelBinding::hosted("gemini-2.0-flash-exp"))
            .build()
            .unwrap();

        assert_eq!(config.name(), "chatai_agent");
        assert_eq!(config.description(), "");
        assert!(config.tools().is_empty());
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = AgentConfig::builder("  ")
            .instruction("x")
            .model(ModelBinding::hosted("m"))
            .build()
            .unwrap_err();
        assert!(matches!(err, StarterError::Config(_)));
    }

    #[test]
    fn test_missing_instruction_rejected() {
        let err = AgentConfig::builder("a").model(ModelBinding::hosted("m")).build().unwrap_err();
        assert!(err.to_string().contains("non-empty instruction"));
    }

    #[test]
    fn test_missing_model_rejected() {
        let err = AgentConfig::builder("a").instruction("x").build().unwrap_err();
        assert!(err.to_string().contains("requires a model"));
    }
}
