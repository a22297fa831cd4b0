//! Calculator configuration
//!
//! Loaded from JSON; every field is optional and falls back to the defaults
//! below.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Default lifetime of the result line, in milliseconds
pub const DEFAULT_RESULT_TIMEOUT_MS: u64 = 3_000;

/// Default lifetime of the easter indicator, in milliseconds
pub const DEFAULT_EASTER_TIMEOUT_MS: u64 = 3_000;

/// Default text shown when evaluation fails
pub const DEFAULT_FAILURE_TEXT: &str = "Error";

/// What the result line shows after an evaluation
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ResultMessage {
    /// The formatted numeric result on success, the failure text otherwise
    #[default]
    Computed,
    /// The same opaque text for success and failure
    Fixed {
        /// Text to display
        text: String,
    },
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON could not be parsed
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
    /// Values parsed but are unusable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Calculator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// How long the result line stays visible
    pub result_timeout_ms: u64,
    /// How long the easter indicator stays visible
    pub easter_timeout_ms: u64,
    /// Show the easter indicator on evaluation
    pub easter_enabled: bool,
    /// Result line policy
    pub result_message: ResultMessage,
    /// Text for failed evaluations under [`ResultMessage::Computed`]
    pub failure_text: String,
    /// Replace the buffer with a finite result after evaluating
    pub chain_from_result: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            result_timeout_ms: DEFAULT_RESULT_TIMEOUT_MS,
            easter_timeout_ms: DEFAULT_EASTER_TIMEOUT_MS,
            easter_enabled: true,
            result_message: ResultMessage::Computed,
            failure_text: DEFAULT_FAILURE_TEXT.to_string(),
            chain_from_result: false,
        }
    }
}

impl CalculatorConfig {
    /// Create a new config with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and validates a JSON configuration
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes to pretty JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rejects zero timeouts and an empty fixed message
    pub fn validate(&self) -> Result<(), ConfigError> {
        let problem = if self.result_timeout_ms == 0 {
            Some("result_timeout_ms must be greater than zero")
        } else if self.easter_timeout_ms == 0 {
            Some("easter_timeout_ms must be greater than zero")
        } else if matches!(&self.result_message, ResultMessage::Fixed { text } if text.is_empty())
        {
            Some("fixed result text must not be empty")
        } else {
            None
        };

        match problem {
            Some(message) => {
                warn!(reason = message, "rejected calculator configuration");
                Err(ConfigError::Invalid(message.to_string()))
            }
            None => Ok(()),
        }
    }

    /// Set the result line timeout
    #[must_use]
    pub const fn with_result_timeout_ms(mut self, ms: u64) -> Self {
        self.result_timeout_ms = ms;
        self
    }

    /// Set the easter indicator timeout
    #[must_use]
    pub const fn with_easter_timeout_ms(mut self, ms: u64) -> Self {
        self.easter_timeout_ms = ms;
        self
    }

    /// Enable or disable the easter indicator
    #[must_use]
    pub const fn with_easter(mut self, enabled: bool) -> Self {
        self.easter_enabled = enabled;
        self
    }

    /// Show the same opaque text for every evaluation
    #[must_use]
    pub fn with_fixed_message(mut self, text: impl Into<String>) -> Self {
        self.result_message = ResultMessage::Fixed { text: text.into() };
        self
    }

    /// Set the failure text
    #[must_use]
    pub fn with_failure_text(mut self, text: impl Into<String>) -> Self {
        self.failure_text = text.into();
        self
    }

    /// Chain subsequent input from the computed result
    #[must_use]
    pub const fn with_chain_from_result(mut self, chain: bool) -> Self {
        self.chain_from_result = chain;
        self
    }
}
