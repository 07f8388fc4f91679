//! # starter-samples
//!
//! Two ready-made agents, each exposed as `root_agent()`:
//!
//! - [`chat_agent`] - `chatai_agent`, plain chat on an OpenAI-compatible endpoint
//! - [`google_search_agent`] - `google_search_agent`, Gemini with Google Search grounding
//!
//! [`loader`] lists both for hosts that discover agents by name. [`traced_loader`]
//! installs trace export first and hands the handle to every agent it builds.
//!
//! ```no_run
//! use starter_core::AgentLoader;
//!
//! let loader = starter_samples::loader()?;
//! assert_eq!(loader.list_agents(), vec!["chatai_agent", "google_search_agent"]);
//! # Ok::<(), starter_core::StarterError>(())
//! ```

pub mod chat_agent;
pub mod google_search_agent;
pub mod settings;

pub use settings::Settings;

use starter_core::{Agent, MultiAgentLoader, Result};
use starter_telemetry::{TraceExport, TraceExportConfig};
use std::sync::Arc;

fn all_agents(settings: &Settings, trace_export: Option<TraceExport>) -> Result<Vec<Arc<dyn Agent>>> {
    let chat: Arc<dyn Agent> = Arc::new(chat_agent::build(settings, trace_export.clone())?);
    let search: Arc<dyn Agent> = Arc::new(google_search_agent::build(trace_export)?);
    Ok(vec![chat, search])
}

/// Both sample agents; the chat agent is the root.
pub fn loader() -> Result<MultiAgentLoader> {
    MultiAgentLoader::new(all_agents(&Settings::load(), None)?)
}

/// Like [`loader`], with trace export installed from `TRACE_*` variables.
///
/// Fails when `TRACE_API_KEY` is missing or an exporter is already installed.
pub fn traced_loader() -> Result<(MultiAgentLoader, TraceExport)> {
    let settings = Settings::load();
    let export = TraceExport::install(TraceExportConfig::from_env()?)?;
    let loader = MultiAgentLoader::new(all_agents(&settings, Some(export.clone()))?)?;
    Ok((loader, export))
}
