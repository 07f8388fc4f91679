use async_trait::async_trait;
use starter_core::{Llm, LlmRequest, LlmResponse, LlmResponseStream, Result, StarterError};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Scripted model for tests. Each call consumes one queued turn and records the request.
pub struct MockLlm {
    name: String,
    turns: Mutex<VecDeque<Vec<LlmResponse>>>,
    requests: Mutex<Vec<LlmRequest>>,
}

impl MockLlm {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), turns: Mutex::new(VecDeque::new()), requests: Mutex::new(Vec::new()) }
    }

    /// Queue a turn consisting of a single response.
    pub fn with_response(self, response: LlmResponse) -> Self {
        self.with_turn(vec![response])
    }

    pub fn with_turn(self, responses: Vec<LlmResponse>) -> Self {
        if let Ok(mut turns) = self.turns.lock() {
            turns.push_back(responses);
        }
        self
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<LlmRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl Llm for MockLlm {
    fn name(&self) -> &str {
        &self.name
    }

    async fn generate_content(&self, req: LlmRequest) -> Result<LlmResponseStream> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(req);
        }

        let responses = self
            .turns
            .lock()
            .ok()
            .and_then(|mut turns| turns.pop_front())
            .ok_or_else(|| StarterError::Model(format!("{}: no scripted responses left", self.name)))?;

        let stream = async_stream::stream! {
            for response in responses {
                yield Ok(response);
            }
        };
        Ok(Box::pin(stream))
    }
}
