//! # starter-tool
//!
//! Tools an agent can be configured with.
//!
//! - [`GoogleSearchTool`] - search grounding executed by the hosted model
//! - [`FunctionTool`] - wrap an async closure as a locally executed tool

pub mod builtin;
mod function_tool;

pub use builtin::{GoogleSearchTool, google_search};
pub use function_tool::FunctionTool;
