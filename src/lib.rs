//! Combobox - accessible autocomplete widget for terminal UIs
//!
//! A text input paired with a filtered dropdown list of string options, with
//! keyboard navigation and mouse interaction.
//!
//! # Features
//!
//! - **Substring Filtering**: case-insensitive, order-preserving matching
//! - **Keyboard Navigation**: circular arrow-key highlighting, Enter to commit
//! - **Pointer Interaction**: hover highlighting, click to commit, outside click to close
//! - **Accessibility Metadata**: ARIA combobox/listbox attributes as plain data
//! - **Terminal Host**: ratatui rendering and crossterm event translation
//!
//! # Example
//!
//! ```
//! use combobox::{Combobox, Event, Key};
//!
//! let options: Vec<String> = ["Lion", "Tiger", "Elephant"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//! let mut widget = Combobox::new(options, "Animals");
//!
//! widget.handle(Event::Focus);
//! widget.handle(Event::Input("e".to_string()));
//! assert_eq!(widget.filtered().collect::<Vec<_>>(), ["Tiger", "Elephant"]);
//!
//! widget.handle(Event::Key(Key::ArrowDown));
//! widget.handle(Event::Key(Key::Enter));
//! assert_eq!(widget.query(), "Tiger");
//! assert!(!widget.is_open());
//! ```

pub mod combobox;
pub mod config;
pub mod error;
pub mod logging;
pub mod script;
pub mod tui;

// Re-export main types
pub use combobox::a11y::NO_RESULTS;
pub use combobox::{
    AccessibilityProps, Combobox, Event, FocusRequest, Key, ListContent, OptionRow, Response,
    Snapshot, Viewport,
};
pub use config::PickerConfig;
pub use error::{ComboboxError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
