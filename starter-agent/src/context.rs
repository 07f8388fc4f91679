use starter_core::{Content, InvocationContext, ToolContext};
use std::sync::Arc;

/// Invocation context for a single user turn, for hosts and tests without a session store.
#[derive(Debug, Clone)]
pub struct SimpleInvocationContext {
    invocation_id: String,
    user_id: String,
    session_id: String,
    user_content: Content,
}

impl SimpleInvocationContext {
    pub fn new(user_content: Content) -> Self {
        Self {
            invocation_id: uuid::Uuid::new_v4().to_string(),
            user_id: "user".to_string(),
            session_id: uuid::Uuid::new_v4().to_string(),
            user_content,
        }
    }

    /// Shorthand for a plain-text user message.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new(Content::new("user").with_text(text))
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = session_id.into();
        self
    }

    pub fn with_invocation_id(mut self, invocation_id: impl Into<String>) -> Self {
        self.invocation_id = invocation_id.into();
        self
    }
}

impl InvocationContext for SimpleInvocationContext {
    fn invocation_id(&self) -> &str {
        &self.invocation_id
    }

    fn user_id(&self) -> &str {
        &self.user_id
    }

    fn session_id(&self) -> &str {
        &self.session_id
    }

    fn user_content(&self) -> &Content {
        &self.user_content
    }
}

// Gives tools the invocation they run in plus the call they answer.
pub(crate) struct AgentToolContext {
    parent_ctx: Arc<dyn InvocationContext>,
    agent_name: String,
    function_call_id: String,
}

impl AgentToolContext {
    pub(crate) fn new(
        parent_ctx: Arc<dyn InvocationContext>,
        agent_name: String,
        function_call_id: String,
    ) -> Self {
        Self { parent_ctx, agent_name, function_call_id }
    }
}

impl ToolContext for AgentToolContext {
    fn invocation_id(&self) -> &str {
        self.parent_ctx.invocation_id()
    }

    fn agent_name(&self) -> &str {
        &self.agent_name
    }

    fn function_call_id(&self) -> &str {
        &self.function_call_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_context() {
        let ctx = SimpleInvocationContext::from_text("hello").with_user_id("u-1");
        assert_eq!(ctx.user_id(), "u-1");
        assert_eq!(ctx.user_content().text(), "hello");
        assert!(!ctx.invocation_id().is_empty());
        assert_ne!(ctx.invocation_id(), ctx.session_id());
    }

    #[test]
    fn test_tool_context_delegates() {
        let parent: Arc<dyn InvocationContext> =
            Arc::new(SimpleInvocationContext::from_text("hi").with_invocation_id("inv-7"));
        let tool_ctx = AgentToolContext::new(parent, "chatai_agent".to_string(), "call-1".to_string());
        assert_eq!(tool_ctx.invocation_id(), "inv-7");
        assert_eq!(tool_ctx.agent_name(), "chatai_agent");
        assert_eq!(tool_ctx.function_call_id(), "call-1");
    }
}
