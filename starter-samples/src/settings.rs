//! Environment-driven settings for the sample agents.

use std::sync::Once;

pub const DEFAULT_OPENAI_API_BASE: &str = "https://api.groq.com/openai/v1";

static DOTENV: Once = Once::new();

/// Load `.env` from the working directory into the process environment, once.
///
/// Variables already set in the process win over the file.
pub fn load_dotenv() {
    DOTENV.call_once(|| match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env"),
        Err(_) => tracing::debug!("No .env file found; using process environment"),
    });
}

#[derive(Clone)]
pub struct Settings {
    /// May be empty; the endpoint rejects the first call in that case.
    pub openai_api_key: String,
    pub openai_api_base: String,
}

impl Settings {
    /// `.env` first, then `OPENAI_API_KEY` / `OPENAI_API_BASE` from the process.
    pub fn load() -> Self {
        load_dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            openai_api_key: lookup("OPENAI_API_KEY").unwrap_or_default(),
            openai_api_base: lookup("OPENAI_API_BASE")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_OPENAI_API_BASE.to_string()),
        }
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("openai_api_key", &if self.openai_api_key.is_empty() { "<unset>" } else { "<redacted>" })
            .field("openai_api_base", &self.openai_api_base)
            .finish()
    }
}
