//! Provider configuration

use serde::{Deserialize, Serialize};

/// Model used when the caller does not choose one.
pub const DEFAULT_MODEL: &str = "claude-haiku-4-5-20251001";

/// Anthropic-specific configuration
///
/// Deliberately small: everything beyond the key override and the model
/// identifier (endpoints, retry policy, caching) belongs to the delegate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnthropicConfig {
    /// Explicit API key override. When `None`, the key is resolved from the
    /// installed credential store, then the `ANTHROPIC_API_KEY` environment
    /// variable.
    pub api_key: Option<String>,
    /// Model identifier handed to the delegate.
    pub model: String,
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl AnthropicConfig {
    /// Configuration with an explicit API key and the default model.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Replace the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}
