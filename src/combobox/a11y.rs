//! Accessibility attributes and the list rendering contract.
//!
//! These mirror the ARIA combobox pattern: the input is a `combobox` that
//! controls a `listbox` of `option` rows, and the highlighted row is
//! announced through `aria-activedescendant`.

use serde::Serialize;

pub const INPUT_ID: &str = "combobox-input";
pub const LISTBOX_ID: &str = "combobox-listbox";
pub const NO_RESULTS: &str = "No results found";

/// Element id of the option row at `index` in the filtered list.
pub fn option_id(index: usize) -> String {
    format!("option-{}", index)
}

/// Attributes of the input control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputProps {
    pub id: &'static str,
    pub role: &'static str,
    pub aria_autocomplete: &'static str,
    pub aria_expanded: bool,
    pub aria_controls: &'static str,
    pub aria_activedescendant: Option<String>,
    pub placeholder: String,
}

/// Attributes of the toggle button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToggleProps {
    pub aria_label: String,
    pub aria_expanded: bool,
    pub aria_controls: &'static str,
}

/// Everything assistive technology needs from the widget chrome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessibilityProps {
    pub label: String,
    pub input: InputProps,
    pub toggle: ToggleProps,
}

/// One selectable row of the open list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionRow {
    pub id: String,
    pub role: &'static str,
    /// Position in the filtered list.
    pub index: usize,
    pub text: String,
    pub aria_selected: bool,
}

/// The placeholder row shown when nothing matches.
///
/// It is announced as an option but can never be selected, so it has no
/// `aria_selected` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoResultsRow {
    pub role: &'static str,
    pub text: &'static str,
}

impl Default for NoResultsRow {
    fn default() -> Self {
        Self {
            role: "option",
            text: NO_RESULTS,
        }
    }
}

/// What the list area shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "content", rename_all = "snake_case")]
pub enum ListContent {
    /// Dropdown closed: no list at all.
    Hidden,
    /// Open with nothing to show: a single non-interactive row.
    NoResults(NoResultsRow),
    Options(Vec<OptionRow>),
}
