use crate::model::LlmResponse;
use crate::types::Content;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Event represents a single step an agent yields while running.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub invocation_id: String,
    pub author: String,
    #[serde(flatten)]
    pub llm_response: LlmResponse,
}

impl Event {
    pub fn new(invocation_id: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            invocation_id: invocation_id.into(),
            author: String::new(),
            llm_response: LlmResponse::default(),
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Convenience method to access content directly.
    pub fn content(&self) -> Option<&Content> {
        self.llm_response.content.as_ref()
    }

    pub fn set_content(&mut self, content: Content) {
        self.llm_response.content = Some(content);
    }

    pub fn is_final_response(&self) -> bool {
        self.llm_response.turn_complete
            && self.content().map(|c| c.function_calls().next().is_none()).unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_creation() {
        let event = Event::new("inv-123").with_author("chatai_agent");
        assert_eq!(event.invocation_id, "inv-123");
        assert_eq!(event.author, "chatai_agent");
        assert!(!event.id.is_empty());
        assert!(event.content().is_none());
    }

    #[test]
    fn test_final_response() {
        let mut event = Event::new("inv");
        event.llm_response = LlmResponse::new(Content::new("model").with_text("done"));
        assert!(event.is_final_response());

        event.llm_response.turn_complete = false;
        assert!(!event.is_final_response());
    }
}
