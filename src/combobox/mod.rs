//! Combobox interaction state machine
//!
//! Owns the query, the filtered view of the option set, the open flag and the
//! active (highlighted) row. Hosts feed it discrete [`Event`]s one at a time
//! and apply the returned [`Response`] effects (focus changes and default
//! action suppression). Scroll-into-view is tracked in the [`Viewport`],
//! which hosts read when rendering.

pub mod a11y;
pub mod event;
pub mod filter;
pub mod viewport;

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

pub use a11y::{AccessibilityProps, ListContent, OptionRow};
pub use event::{Event, FocusRequest, Key, Response};
pub use viewport::Viewport;

use a11y::{InputProps, NoResultsRow, ToggleProps, INPUT_ID, LISTBOX_ID};

/// An autocomplete combobox over a fixed set of string options.
#[derive(Debug, Clone)]
pub struct Combobox {
    options: Arc<[String]>,
    label: String,
    query: String,
    /// Indices into `options`, in original order.
    filtered: Vec<usize>,
    open: bool,
    /// Always a valid index into `filtered`.
    active: Option<usize>,
    focused: bool,
    viewport: Viewport,
}

/// Serializable view of the whole widget state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub label: String,
    pub query: String,
    pub open: bool,
    pub focused: bool,
    pub active: Option<usize>,
    pub filtered: Vec<String>,
    pub list: ListContent,
    pub accessibility: AccessibilityProps,
}

impl Combobox {
    pub fn new(options: impl Into<Arc<[String]>>, label: impl Into<String>) -> Self {
        let mut combobox = Self {
            options: options.into(),
            label: label.into(),
            query: String::new(),
            filtered: Vec::new(),
            open: false,
            active: None,
            focused: false,
            viewport: Viewport::default(),
        };
        combobox.refilter();
        combobox
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Filtered options in display order.
    pub fn filtered(&self) -> impl Iterator<Item = &str> + '_ {
        self.filtered.iter().map(|&idx| self.options[idx].as_str())
    }

    /// Filtered option at display position `index`.
    pub fn filtered_option(&self, index: usize) -> Option<&str> {
        self.filtered
            .get(index)
            .map(|&idx| self.options[idx].as_str())
    }

    pub fn active_option(&self) -> Option<&str> {
        self.active.and_then(|i| self.filtered_option(i))
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Let the host report how many rows fit in the list area.
    pub fn set_visible_rows(&mut self, rows: usize) {
        let total = self.filtered.len().max(1);
        self.viewport.resize(rows, total);
        if let Some(i) = self.active {
            self.viewport.ensure_visible(i);
        }
    }

    /// Replace the option set. Filtering is recomputed from scratch.
    pub fn set_options(&mut self, options: impl Into<Arc<[String]>>) {
        self.options = options.into();
        self.refilter();
    }

    /// Process one input event.
    pub fn handle(&mut self, event: Event) -> Response {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Input(text) => {
                self.set_query(text);
                Response::default()
            }
            Event::Focus => {
                self.focused = true;
                self.open = !self.query.trim().is_empty();
                debug!(open = self.open, "input focused");
                Response::default()
            }
            Event::Blur => {
                self.focused = false;
                Response::default()
            }
            Event::ToggleClicked => {
                self.open = !self.open;
                debug!(open = self.open, "toggle clicked");
                Response::default()
            }
            Event::OptionHovered(index) => {
                if !self.open || index >= self.filtered.len() || self.active == Some(index) {
                    return Response::default();
                }
                self.set_active(Some(index));
                Response::default()
            }
            Event::OptionClicked(index) => {
                if !self.open || index >= self.filtered.len() {
                    return Response::default();
                }
                self.commit(index);
                self.focused = true;
                Response {
                    focus: Some(FocusRequest::Focus),
                    committed: true,
                    ..Response::default()
                }
            }
            Event::PointerDownOutside => {
                if self.open {
                    debug!("pointer down outside, closing");
                }
                self.open = false;
                Response::default()
            }
        }
    }

    fn handle_key(&mut self, key: Key) -> Response {
        if !self.focused {
            return Response::default();
        }

        let n = self.filtered.len();
        match key {
            Key::ArrowDown => {
                self.open = true;
                let next = match self.active {
                    _ if n == 0 => None,
                    Some(i) if i + 1 < n => Some(i + 1),
                    _ => Some(0),
                };
                self.set_active(next);
                Response::prevented()
            }
            Key::ArrowUp => {
                self.open = true;
                let prev = match self.active {
                    _ if n == 0 => None,
                    Some(i) if i > 0 => Some(i - 1),
                    _ => Some(n - 1),
                };
                self.set_active(prev);
                Response::prevented()
            }
            Key::Enter => match self.active {
                Some(i) if i < n => {
                    self.commit(i);
                    Response {
                        committed: true,
                        ..Response::default()
                    }
                }
                _ => Response::default(),
            },
            Key::Escape => {
                self.open = false;
                self.focused = false;
                Response {
                    focus: Some(FocusRequest::Blur),
                    ..Response::default()
                }
            }
            Key::Tab => {
                self.open = false;
                Response::default()
            }
            Key::Other => Response::default(),
        }
    }

    /// Set the active row and scroll it into view.
    fn set_active(&mut self, active: Option<usize>) {
        if active == self.active {
            return;
        }
        self.active = active;
        debug!(active = ?active, "active option changed");
        if let Some(index) = active {
            self.viewport.ensure_visible(index);
        }
    }

    fn set_query(&mut self, text: String) {
        if text == self.query {
            return;
        }
        self.query = text;
        self.refilter();
    }

    fn commit(&mut self, index: usize) {
        let Some(value) = self.filtered_option(index).map(str::to_owned) else {
            return;
        };
        info!(label = %self.label, value = %value, "option committed");
        self.set_query(value);
        self.open = false;
    }

    fn refilter(&mut self) {
        self.filtered = filter::filter_options(&self.options, &self.query);
        self.open = !self.query.trim().is_empty() || self.filtered.is_empty();
        self.active = None;
        self.viewport.reset();
        debug!(
            query = %self.query,
            matches = self.filtered.len(),
            open = self.open,
            "options filtered"
        );
    }

    /// Attributes for the input, toggle and list chrome.
    pub fn accessibility(&self) -> AccessibilityProps {
        AccessibilityProps {
            label: self.label.clone(),
            input: InputProps {
                id: INPUT_ID,
                role: "combobox",
                aria_autocomplete: "list",
                aria_expanded: self.open,
                aria_controls: LISTBOX_ID,
                aria_activedescendant: self.active.map(a11y::option_id),
                placeholder: format!("Select {}", self.label),
            },
            toggle: ToggleProps {
                aria_label: format!("{} dropdown", self.label),
                aria_expanded: self.open,
                aria_controls: LISTBOX_ID,
            },
        }
    }

    /// Rows the list area should render right now.
    pub fn list_content(&self) -> ListContent {
        if !self.open {
            return ListContent::Hidden;
        }
        if self.filtered.is_empty() {
            return ListContent::NoResults(NoResultsRow::default());
        }
        ListContent::Options(
            self.filtered()
                .enumerate()
                .map(|(index, text)| OptionRow {
                    id: a11y::option_id(index),
                    role: "option",
                    index,
                    text: text.to_string(),
                    aria_selected: self.active == Some(index),
                })
                .collect(),
        )
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            label: self.label.clone(),
            query: self.query.clone(),
            open: self.open,
            focused: self.focused,
            active: self.active,
            filtered: self.filtered().map(str::to_owned).collect(),
            list: self.list_content(),
            accessibility: self.accessibility(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn focused(items: &[&str]) -> Combobox {
        let mut cb = Combobox::new(options(items), "Animals");
        cb.handle(Event::Focus);
        cb
    }

    fn typed(items: &[&str], query: &str) -> Combobox {
        let mut cb = focused(items);
        cb.handle(Event::Input(query.to_string()));
        cb
    }

    const BIG_CATS: &[&str] = &["Lion", "Tiger", "Elephant"];

    #[test]
    fn defaults_on_construction() {
        let cb = Combobox::new(options(BIG_CATS), "Animals");
        assert_eq!(cb.query(), "");
        assert_eq!(cb.filtered().collect::<Vec<_>>(), BIG_CATS);
        assert!(!cb.is_open());
        assert!(!cb.is_focused());
        assert_eq!(cb.active(), None);
        assert_eq!(cb.list_content(), ListContent::Hidden);
    }

    #[test]
    fn empty_option_set_starts_open_with_no_results() {
        let cb = Combobox::new(Vec::<String>::new(), "Animals");
        assert!(cb.is_open());
        assert!(matches!(cb.list_content(), ListContent::NoResults(_)));
    }

    #[test]
    fn typing_filters_and_opens() {
        let cb = typed(BIG_CATS, "e");
        assert_eq!(cb.filtered().collect::<Vec<_>>(), vec!["Tiger", "Elephant"]);
        assert!(cb.is_open());
        assert_eq!(cb.active(), None);
    }

    #[test]
    fn whitespace_query_opens_with_no_results() {
        let cb = typed(BIG_CATS, "  ");
        assert!(cb.is_open());
        assert!(matches!(cb.list_content(), ListContent::NoResults(_)));
    }

    #[test]
    fn clearing_query_closes() {
        let mut cb = typed(BIG_CATS, "li");
        cb.handle(Event::Input(String::new()));
        assert!(!cb.is_open());
        assert_eq!(cb.filtered_len(), 3);
    }

    #[test]
    fn arrow_down_cycles() {
        let mut cb = focused(BIG_CATS);
        let resp = cb.handle(Event::Key(Key::ArrowDown));
        assert!(cb.is_open());
        assert!(resp.prevent_default);
        assert_eq!(cb.active(), Some(0));
        cb.handle(Event::Key(Key::ArrowDown));
        cb.handle(Event::Key(Key::ArrowDown));
        assert_eq!(cb.active(), Some(2));
        cb.handle(Event::Key(Key::ArrowDown));
        assert_eq!(cb.active(), Some(0));
    }

    #[test]
    fn arrow_up_cycles() {
        let mut cb = focused(BIG_CATS);
        let resp = cb.handle(Event::Key(Key::ArrowUp));
        assert!(resp.prevent_default);
        assert_eq!(cb.active(), Some(2));
        cb.handle(Event::Key(Key::ArrowUp));
        assert_eq!(cb.active(), Some(1));
        cb.handle(Event::Key(Key::ArrowUp));
        cb.handle(Event::Key(Key::ArrowUp));
        assert_eq!(cb.active(), Some(2));
    }

    #[test]
    fn arrows_with_no_results_keep_active_empty() {
        let mut cb = typed(BIG_CATS, "zzz");
        cb.handle(Event::Key(Key::ArrowDown));
        assert_eq!(cb.active(), None);
        cb.handle(Event::Key(Key::ArrowUp));
        assert_eq!(cb.active(), None);
        assert!(cb.is_open());
    }

    #[test]
    fn enter_commits_active_option() {
        let mut cb = typed(BIG_CATS, "e");
        cb.handle(Event::Key(Key::ArrowDown));
        cb.handle(Event::Key(Key::ArrowDown));
        let resp = cb.handle(Event::Key(Key::Enter));
        assert!(resp.committed);
        assert!(!resp.prevent_default);
        assert_eq!(cb.query(), "Elephant");
        assert!(!cb.is_open());
        assert_eq!(cb.active(), None);
        assert_eq!(cb.filtered().collect::<Vec<_>>(), vec!["Elephant"]);
    }

    #[test]
    fn enter_without_active_is_noop() {
        let mut cb = typed(BIG_CATS, "zzz");
        let before = cb.snapshot();
        let resp = cb.handle(Event::Key(Key::Enter));
        assert_eq!(resp, Response::default());
        assert_eq!(cb.snapshot(), before);
    }

    #[test]
    fn escape_closes_and_blurs() {
        let mut cb = typed(BIG_CATS, "i");
        let resp = cb.handle(Event::Key(Key::Escape));
        assert!(!cb.is_open());
        assert!(!cb.is_focused());
        assert_eq!(resp.focus, Some(FocusRequest::Blur));
        assert_eq!(cb.query(), "i");
    }

    #[test]
    fn tab_closes_without_committing() {
        let mut cb = typed(BIG_CATS, "i");
        cb.handle(Event::Key(Key::ArrowDown));
        let resp = cb.handle(Event::Key(Key::Tab));
        assert!(!cb.is_open());
        assert!(!resp.prevent_default);
        assert_eq!(cb.query(), "i");
    }

    #[test]
    fn keys_are_ignored_without_focus() {
        let mut cb = Combobox::new(options(BIG_CATS), "Animals");
        cb.handle(Event::Key(Key::ArrowDown));
        assert!(!cb.is_open());
        assert_eq!(cb.active(), None);
    }

    #[test]
    fn toggle_flips_open_without_touching_query() {
        let mut cb = focused(BIG_CATS);
        cb.handle(Event::ToggleClicked);
        assert!(cb.is_open());
        match cb.list_content() {
            ListContent::Options(rows) => assert_eq!(rows.len(), 3),
            other => panic!("unexpected list content: {:?}", other),
        }
        cb.handle(Event::ToggleClicked);
        assert!(!cb.is_open());
        assert_eq!(cb.query(), "");
    }

    #[test]
    fn hover_sets_active() {
        let mut cb = typed(BIG_CATS, "e");
        let resp = cb.handle(Event::OptionHovered(1));
        assert_eq!(cb.active(), Some(1));
        assert_eq!(resp, Response::default());
        assert_eq!(cb.active_option(), Some("Elephant"));
        cb.handle(Event::OptionHovered(9));
        assert_eq!(cb.active(), Some(1));
    }

    #[test]
    fn click_commits_and_refocuses() {
        let mut cb = typed(BIG_CATS, "e");
        cb.handle(Event::Blur);
        let resp = cb.handle(Event::OptionClicked(0));
        assert_eq!(cb.query(), "Tiger");
        assert!(!cb.is_open());
        assert!(cb.is_focused());
        assert_eq!(resp.focus, Some(FocusRequest::Focus));
    }

    #[test]
    fn click_outside_closes_without_altering_query() {
        let mut cb = typed(BIG_CATS, "ti");
        cb.handle(Event::PointerDownOutside);
        assert!(!cb.is_open());
        assert_eq!(cb.query(), "ti");
    }

    #[test]
    fn focus_opens_only_with_query() {
        let mut cb = Combobox::new(options(BIG_CATS), "Animals");
        cb.handle(Event::Focus);
        assert!(!cb.is_open());

        cb.handle(Event::Input("ti".into()));
        cb.handle(Event::PointerDownOutside);
        cb.handle(Event::Blur);
        cb.handle(Event::Focus);
        assert!(cb.is_open());
    }

    #[test]
    fn accessibility_tracks_state() {
        let mut cb = typed(BIG_CATS, "e");
        cb.handle(Event::Key(Key::ArrowDown));
        let props = cb.accessibility();
        assert!(props.input.aria_expanded);
        assert_eq!(props.input.aria_activedescendant.as_deref(), Some("option-0"));
        assert_eq!(props.input.placeholder, "Select Animals");
        assert_eq!(props.toggle.aria_label, "Animals dropdown");

        match cb.list_content() {
            ListContent::Options(rows) => {
                assert_eq!(rows.len(), 2);
                assert!(rows[0].aria_selected);
                assert!(!rows[1].aria_selected);
                assert_eq!(rows[1].id, "option-1");
            }
            other => panic!("unexpected list content: {:?}", other),
        }
    }

    #[test]
    fn option_set_change_resets_active() {
        let mut cb = typed(BIG_CATS, "i");
        cb.handle(Event::Key(Key::ArrowDown));
        cb.set_options(options(&["Giraffe", "Rhino"]));
        assert_eq!(cb.active(), None);
        assert_eq!(cb.filtered().collect::<Vec<_>>(), vec!["Giraffe", "Rhino"]);
    }

    #[test]
    fn navigation_scrolls_viewport() {
        let items: Vec<String> = (0..20).map(|i| format!("item {}", i)).collect();
        let mut cb = Combobox::new(items, "Items");
        cb.set_visible_rows(5);
        cb.handle(Event::Focus);
        cb.handle(Event::Key(Key::ArrowUp));
        assert_eq!(cb.active(), Some(19));
        assert_eq!(cb.viewport().visible_range(20), 15..20);
        cb.handle(Event::Key(Key::ArrowDown));
        assert_eq!(cb.viewport().scroll_offset, 0);
    }

    #[test]
    fn hover_scrolls_viewport() {
        let items: Vec<String> = (0..20).map(|i| format!("item {}", i)).collect();
        let mut cb = Combobox::new(items, "Items");
        cb.set_visible_rows(5);
        cb.handle(Event::Focus);
        cb.handle(Event::ToggleClicked);
        cb.handle(Event::OptionHovered(7));
        assert_eq!(cb.viewport().visible_range(20), 3..8);
    }

    #[test]
    fn no_results_row_is_an_unselected_option() {
        let cb = typed(BIG_CATS, "zzz");
        let json = serde_json::to_value(cb.list_content()).unwrap();
        assert_eq!(json["kind"], "no_results");
        assert_eq!(json["content"]["role"], "option");
        assert_eq!(json["content"]["text"], a11y::NO_RESULTS);
        assert!(json["content"].get("aria_selected").is_none());
    }

    #[test]
    fn option_rows_carry_option_role() {
        let cb = typed(BIG_CATS, "e");
        let json = serde_json::to_value(cb.snapshot()).unwrap();
        let rows = json["list"]["content"].as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row["role"] == "option"));
        assert_eq!(rows[0]["aria_selected"], false);
    }

    #[test]
    fn active_index_stays_valid() {
        let mut cb = focused(&["Lion", "Tiger", "Elephant", "Giraffe"]);
        let script = [
            Event::Input("i".into()),
            Event::Key(Key::ArrowUp),
            Event::Input("ig".into()),
            Event::Key(Key::ArrowDown),
            Event::OptionHovered(0),
            Event::Input("".into()),
            Event::Key(Key::ArrowUp),
            Event::Key(Key::ArrowUp),
        ];
        for event in script {
            cb.handle(event);
            if let Some(i) = cb.active() {
                assert!(i < cb.filtered_len());
            }
        }
    }
}
