use crate::{Agent, Result, StarterError};
use std::sync::Arc;

/// Discovery surface for hosts that drive agents by name.
pub trait AgentLoader: Send + Sync {
    /// Load an agent by name. An empty name selects the root agent.
    fn load_agent(&self, name: &str) -> Result<Arc<dyn Agent>>;

    /// List all available agent names.
    fn list_agents(&self) -> Vec<String>;

    /// Get the root (default) agent.
    fn root_agent(&self) -> Arc<dyn Agent>;
}

/// Single agent loader that returns the same agent for all names.
pub struct SingleAgentLoader {
    agent: Arc<dyn Agent>,
}

impl SingleAgentLoader {
    pub fn new(agent: Arc<dyn Agent>) -> Self {
        Self { agent }
    }
}

impl AgentLoader for SingleAgentLoader {
    fn load_agent(&self, name: &str) -> Result<Arc<dyn Agent>> {
        if name.is_empty() || name == self.agent.name() {
            Ok(self.agent.clone())
        } else {
            Err(StarterError::Config(format!(
                "Cannot load agent '{}' - use empty string or '{}'",
                name,
                self.agent.name()
            )))
        }
    }

    fn list_agents(&self) -> Vec<String> {
        vec![self.agent.name().to_string()]
    }

    fn root_agent(&self) -> Arc<dyn Agent> {
        self.agent.clone()
    }
}

/// Multi-agent loader that manages multiple agents by name.
pub struct MultiAgentLoader {
    agents: Vec<Arc<dyn Agent>>,
}

impl MultiAgentLoader {
    /// The first agent becomes the root agent. Duplicate names are rejected.
    pub fn new(agents: Vec<Arc<dyn Agent>>) -> Result<Self> {
        if agents.is_empty() {
            return Err(StarterError::Config(
                "MultiAgentLoader requires at least one agent".to_string(),
            ));
        }

        for (i, agent) in agents.iter().enumerate() {
            if agents[..i].iter().any(|a| a.name() == agent.name()) {
                return Err(StarterError::Config(format!("Duplicate agent name: {}", agent.name())));
            }
        }

        Ok(Self { agents })
    }
}

impl AgentLoader for MultiAgentLoader {
    fn load_agent(&self, name: &str) -> Result<Arc<dyn Agent>> {
        if name.is_empty() {
            return Ok(self.root_agent());
        }

        self.agents.iter().find(|a| a.name() == name).cloned().ok_or_else(|| {
            StarterError::Config(format!(
                "Agent '{}' not found. Available agents: {:?}",
                name,
                self.list_agents()
            ))
        })
    }

    fn list_agents(&self) -> Vec<String> {
        self.agents.iter().map(|a| a.name().to_string()).collect()
    }

    fn root_agent(&self) -> Arc<dyn Agent> {
        self.agents[0].clone()
    }
}
