//! Host-agnostic input events and the effects a host must apply afterwards.

/// Keys the combobox reacts to while its input has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    Tab,
    /// Anything else; text editing is left to the input control.
    Other,
}

/// A discrete input event delivered to [`super::Combobox::handle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key pressed while the input has focus.
    Key(Key),
    /// The input text was edited natively.
    Input(String),
    /// The input gained focus.
    Focus,
    /// The input lost focus for a reason the widget does not own.
    Blur,
    /// The toggle button was clicked.
    ToggleClicked,
    /// The pointer moved over a rendered option row.
    OptionHovered(usize),
    /// A rendered option row was clicked.
    OptionClicked(usize),
    /// Pointer-down anywhere outside the widget root.
    PointerDownOutside,
}

/// Focus change requested by the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusRequest {
    Focus,
    Blur,
}

/// What the host should do after an event was handled.
///
/// All effects are optional. A host without a focusable input simply
/// ignores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Response {
    /// Suppress the host's default action for the key (e.g. scrolling).
    pub prevent_default: bool,
    /// Move keyboard focus to or away from the input.
    pub focus: Option<FocusRequest>,
    /// An option was committed into the input.
    pub committed: bool,
}

impl Response {
    pub(crate) fn prevented() -> Self {
        Self {
            prevent_default: true,
            ..Self::default()
        }
    }
}
