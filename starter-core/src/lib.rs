//! # starter-core
//!
//! Core traits and types for bootstrapping agents.
//!
//! ## Overview
//!
//! - [`Agent`] - The trait every runnable agent implements
//! - [`Llm`] - A model backend the agent talks to
//! - [`Tool`] / [`ToolSet`] - Capabilities an agent may invoke, kept in order
//! - [`ModelBinding`] - Which backend an agent is bound to, as plain data
//! - [`AgentConfig`] - Identity, instruction, model binding and tools in one value
//! - [`AgentLoader`] - How an external host finds `root_agent`
//! - [`StarterError`] / [`Result`] - Unified error handling
//!
//! ## Quick Start
//!
//! ```rust
//! use starter_core::{AgentConfig, ModelBinding};
//!
//! let config = AgentConfig::builder("chatai_agent")
//!     .description("Agent to chat with.")
//!     .instruction("You are a helpful agent who can chat with the user.")
//!     .model(ModelBinding::custom_endpoint(
//!         "openai/openai/gpt-oss-20b",
//!         "https://api.groq.com/openai/v1",
//!         std::env::var("OPENAI_API_KEY").unwrap_or_default(),
//!     ))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.name(), "chatai_agent");
//! ```

pub mod agent;
pub mod agent_loader;
pub mod binding;
pub mod config;
pub mod error;
pub mod event;
pub mod model;
pub mod tool;
pub mod types;

pub use agent::{Agent, EventStream, InvocationContext};
pub use agent_loader::{AgentLoader, MultiAgentLoader, SingleAgentLoader};
pub use binding::{CustomEndpointRef, HostedModelRef, ModelBinding};
pub use config::{AgentConfig, AgentConfigBuilder};
pub use error::{Result, StarterError};
pub use event::Event;
pub use model::{
    FinishReason, GenerateContentConfig, Llm, LlmRequest, LlmResponse, LlmResponseStream,
    UsageMetadata,
};
pub use tool::{Tool, ToolContext, ToolDeclaration, ToolKind, ToolSet};
pub use types::{Content, FunctionResponseData, Part};
