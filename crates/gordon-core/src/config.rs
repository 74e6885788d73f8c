//! Upstream credential and model configuration.

use std::env;

use crate::fetch::FetchError;

/// Placeholder the operator must replace before the tool can go online.
pub const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY_HERE";

/// Model queried when the environment does not name one.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const API_KEY_VAR: &str = "GEMINI_API_KEY";
const MODEL_VAR: &str = "GORDON_MODEL";

/// Credential and model selection for the upstream service.
///
/// Resolved once at startup and injected into the orchestrator's
/// constructor; nothing in the core reads the environment after that, so
/// tests substitute a config the same way they substitute the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    api_key: String,
    model: String,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Reads `GEMINI_API_KEY` and `GORDON_MODEL` from the environment.
    pub fn from_env() -> Self {
        Self {
            api_key: env::var(API_KEY_VAR).unwrap_or_default(),
            model: env::var(MODEL_VAR).unwrap_or_else(|_| DEFAULT_MODEL.to_owned()),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Rejects a missing or placeholder credential before any network use.
    pub fn ensure_configured(&self) -> Result<(), FetchError> {
        if self.api_key.trim().is_empty() || self.api_key == PLACEHOLDER_API_KEY {
            return Err(FetchError::configuration(format!(
                "no Gemini API key is configured; set the {API_KEY_VAR} environment variable \
                 to a valid key"
            )));
        }
        Ok(())
    }
}
