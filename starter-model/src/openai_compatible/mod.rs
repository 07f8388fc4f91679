//! OpenAI-compatible chat-completions adapter.
//!
//! Works with OpenAI itself and with any proxy or hosted service exposing
//! `POST {base}/chat/completions` (Groq, LiteLLM, vLLM, Ollama).

mod client;
mod config;
pub(crate) mod convert;

pub use client::OpenAICompatible;
pub use config::{DEFAULT_OPENAI_COMPATIBLE_BASE, OpenAICompatibleConfig};
