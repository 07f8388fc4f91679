//! # starter-model
//!
//! Model adapters behind the [`Llm`](starter_core::Llm) trait.
//!
//! - [`GeminiModel`] - hosted Gemini models, including built-in Google Search grounding
//! - [`OpenAICompatible`] - any chat-completions endpoint (Groq, LiteLLM, vLLM, OpenAI)
//! - [`MockLlm`] - scripted model for tests
//! - [`resolve_model`] - binding to model, no network involved
//!
//! ```rust,no_run
//! use starter_core::ModelBinding;
//! use starter_model::resolve_model;
//!
//! let llm = resolve_model(&ModelBinding::hosted("gemini-2.0-flash-exp"))?;
//! assert_eq!(llm.name(), "gemini-2.0-flash-exp");
//! # Ok::<(), starter_core::StarterError>(())
//! ```

pub mod gemini;
pub mod mock;
pub mod openai_compatible;
pub mod resolve;

pub use gemini::{GeminiConfig, GeminiModel};
pub use mock::MockLlm;
pub use openai_compatible::{DEFAULT_OPENAI_COMPATIBLE_BASE, OpenAICompatible, OpenAICompatibleConfig};
pub use resolve::{hosted_api_key_from_env, resolve_model, resolve_model_with_key};
