//! Model bindings: which backend an agent talks to.
//!
//! A binding is plain data. Turning it into a callable [`Llm`](crate::Llm) happens
//! in `starter-model`, and no binding is checked against the network when built.

use serde::{Deserialize, Serialize};

/// A model served by the hosted provider, addressed by its identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostedModelRef {
    pub model_id: String,
}

/// A model behind an OpenAI-compatible endpoint.
///
/// `api_key` may be empty. The backend rejects the first call in that case;
/// construction never does.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomEndpointRef {
    pub model_id: String,
    pub base_url: String,
    #[serde(default, skip_serializing)]
    pub api_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ModelBinding {
    Hosted(HostedModelRef),
    CustomEndpoint(CustomEndpointRef),
}

impl ModelBinding {
    pub fn hosted(model_id: impl Into<String>) -> Self {
        Self::Hosted(HostedModelRef { model_id: model_id.into() })
    }

    pub fn custom_endpoint(
        model_id: impl Into<String>,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self::CustomEndpoint(CustomEndpointRef {
            model_id: model_id.into(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        })
    }

    pub fn model_id(&self) -> &str {
        match self {
            Self::Hosted(r) => &r.model_id,
            Self::CustomEndpoint(r) => &r.model_id,
        }
    }

    /// Whether the bound backend needs a key the agent must carry itself.
    pub fn requires_api_key(&self) -> bool {
        matches!(self, Self::CustomEndpoint(_))
    }
}

impl std::fmt::Debug for CustomEndpointRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let key = if self.api_key.is_empty() { "<unset>" } else { "<redacted>" };
        f.debug_struct("CustomEndpointRef")
            .field("model_id", &self.model_id)
            .field("base_url", &self.base_url)
            .field("api_key", &key)
            .finish()
    }
}
