//! Hosted Gemini adapter.

mod client;
mod config;
pub(crate) mod convert;

pub use client::GeminiModel;
pub use config::{GEMINI_API_BASE, GeminiConfig};
