//! Error types for the combobox host surfaces
//!
//! The widget itself cannot fail; these cover loading configuration,
//! driving the terminal and writing output.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for combobox operations
#[derive(Error, Debug)]
pub enum ComboboxError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read options file '{}': {}", path.display(), source)]
    OptionsFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Label must not be empty")]
    EmptyLabel,

    #[error("Invalid script step '{step}': {reason}")]
    InvalidScriptStep { step: String, reason: String },

    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Result type alias for combobox operations
pub type Result<T> = std::result::Result<T, ComboboxError>;

impl ComboboxError {
    pub fn script_step(step: &str, reason: impl Into<String>) -> Self {
        ComboboxError::InvalidScriptStep {
            step: step.to_string(),
            reason: reason.into(),
        }
    }
}
