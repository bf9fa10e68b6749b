//! Picker configuration: the label and the option set handed to the widget.

use std::path::Path;

use serde::Deserialize;

use crate::error::{ComboboxError, Result};

/// Options shown when nothing else is configured.
pub const DEMO_LABEL: &str = "Animals";
pub const DEMO_OPTIONS: &[&str] = &[
    "Lion",
    "Tiger",
    "Elephant",
    "Giraffe",
    "Zebra",
    "Kangaroo",
    "Panda",
    "Penguin",
    "Dolphin",
    "Cheetah",
    "Koala",
    "Gorilla",
    "Hippopotamus",
    "Rhinoceros",
    "Polar Bear",
    "Wolf",
    "Fox",
    "Deer",
    "Rabbit",
    "Squirrel",
];

/// Construction-time configuration of a combobox
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerConfig {
    /// Display and accessibility label
    pub label: String,
    /// Ordered option set; duplicates are kept
    pub options: Vec<String>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            label: DEMO_LABEL.to_string(),
            options: DEMO_OPTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Accepted JSON layouts of an options file
#[derive(Deserialize)]
#[serde(untagged)]
enum OptionsDocument {
    Full {
        label: Option<String>,
        options: Vec<String>,
    },
    List(Vec<String>),
}

impl PickerConfig {
    /// Parse an options document.
    ///
    /// JSON objects (`{"label": .., "options": [..]}`) and bare JSON arrays are
    /// accepted; anything else is read as one option per non-blank line.
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim_start();
        if trimmed.starts_with('{') || trimmed.starts_with('[') {
            let mut config = Self::default();
            match serde_json::from_str::<OptionsDocument>(trimmed)? {
                OptionsDocument::Full { label, options } => {
                    if let Some(label) = label {
                        config.label = label;
                    }
                    config.options = options;
                }
                OptionsDocument::List(options) => config.options = options,
            }
            return Ok(config);
        }

        Ok(Self {
            options: text
                .lines()
                .map(|line| line.trim_end())
                .filter(|line| !line.trim().is_empty())
                .map(str::to_owned)
                .collect(),
            ..Self::default()
        })
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ComboboxError::OptionsFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Build a config from CLI inputs.
    ///
    /// Precedence: inline options, then the options file, then the demo set.
    /// An explicit label always wins.
    pub fn resolve(
        label: Option<String>,
        options: Vec<String>,
        options_file: Option<&Path>,
    ) -> Result<Self> {
        let mut config = match options_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        if !options.is_empty() {
            config.options = options;
        }
        if let Some(label) = label {
            config.label = label;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.label.trim().is_empty() {
            return Err(ComboboxError::EmptyLabel);
        }
        Ok(())
    }
}
