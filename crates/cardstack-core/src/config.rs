#![forbid(unsafe_code)]

//! Stack configuration.
//!
//! [`StackConfig`] collects the knobs a UI layer sets once when it builds a
//! card stack. With the `config` feature it can be loaded from TOML or JSON:
//!
//! ```toml
//! # cardstack.toml
//! visible_cards = 3
//! initial_cards = 20
//! ```
//!
//! ```rust,ignore
//! let config = StackConfig::from_toml_file("cardstack.toml")?;
//! let stack: StackStateManager = StackStateManager::with_config(config);
//! ```
//!
//! Loaded configurations are validated before they are returned.

#[cfg(feature = "config")]
use std::path::Path;

use thiserror::Error;

/// Default number of cards a UI layer keeps on screen at once.
pub const DEFAULT_VISIBLE_CARDS: usize = 2;

/// Configuration for a [`StackStateManager`](crate::StackStateManager).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StackConfig {
    /// How many cards from the top of the stack are reported by
    /// `visible_indices()`.
    pub visible_cards: usize,
    /// Number of cards the stack is reset to when it is constructed.
    pub initial_cards: usize,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            visible_cards: DEFAULT_VISIBLE_CARDS,
            initial_cards: 0,
        }
    }
}

impl StackConfig {
    #[must_use]
    pub fn new(visible_cards: usize, initial_cards: usize) -> Self {
        Self {
            visible_cards,
            initial_cards,
        }
    }

    #[must_use]
    pub fn with_visible_cards(mut self, visible_cards: usize) -> Self {
        self.visible_cards = visible_cards;
        self
    }

    #[must_use]
    pub fn with_initial_cards(mut self, initial_cards: usize) -> Self {
        self.initial_cards = initial_cards;
        self
    }

    /// Check parameters are within acceptable ranges.
    ///
    /// Returns a list of problems; empty means the config is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.visible_cards == 0 {
            errors.push("visible_cards must be > 0".into());
        }
        errors
    }

    /// Load from a TOML string.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, StackConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validated()
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, StackConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, StackConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validated()
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, StackConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    #[cfg(feature = "config")]
    fn validated(self) -> Result<Self, StackConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            tracing::warn!(?errors, "rejecting invalid stack config");
            Err(StackConfigError::Validation(errors))
        }
    }
}

/// Errors that can occur when loading a [`StackConfig`].
#[derive(Debug, Error)]
pub enum StackConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "config")]
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[cfg(feature = "config")]
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
