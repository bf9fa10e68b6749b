//! Scripted event replay
//!
//! Drives a [`Combobox`] from a list of textual steps, acting as a minimal host
//! that applies the same default actions a real UI would (Tab and outside
//! clicks move focus away from the input).

use std::str::FromStr;

use tracing::debug;

use crate::combobox::{Combobox, Event, Key, Response};
use crate::error::{ComboboxError, Result};

/// One replay step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// `type:<text>` appends text to the query
    Type(String),
    /// `set:<text>` replaces the query
    Set(String),
    /// `backspace` removes the last character
    Backspace,
    Key(Key),
    Focus,
    Blur,
    Toggle,
    Hover(usize),
    Click(usize),
    Outside,
}

fn parse_index(step: &str, value: &str) -> Result<usize> {
    value
        .parse()
        .map_err(|_| ComboboxError::script_step(step, "expected a row index"))
}

impl FromStr for Step {
    type Err = ComboboxError;

    fn from_str(step: &str) -> Result<Self> {
        if let Some((name, value)) = step.split_once(':') {
            return match name {
                "type" => Ok(Step::Type(value.to_string())),
                "set" => Ok(Step::Set(value.to_string())),
                "hover" => Ok(Step::Hover(parse_index(step, value)?)),
                "click" => Ok(Step::Click(parse_index(step, value)?)),
                _ => Err(ComboboxError::script_step(step, "unknown step")),
            };
        }

        match step.to_ascii_lowercase().as_str() {
            "down" => Ok(Step::Key(Key::ArrowDown)),
            "up" => Ok(Step::Key(Key::ArrowUp)),
            "enter" => Ok(Step::Key(Key::Enter)),
            "esc" | "escape" => Ok(Step::Key(Key::Escape)),
            "tab" => Ok(Step::Key(Key::Tab)),
            "backspace" => Ok(Step::Backspace),
            "focus" => Ok(Step::Focus),
            "blur" => Ok(Step::Blur),
            "toggle" => Ok(Step::Toggle),
            "outside" => Ok(Step::Outside),
            _ => Err(ComboboxError::script_step(step, "unknown step")),
        }
    }
}

/// Parse every step before running any of them.
pub fn parse_script<S: AsRef<str>>(steps: &[S]) -> Result<Vec<Step>> {
    steps.iter().map(|s| s.as_ref().parse()).collect()
}

/// Apply a step, including the host's default actions.
pub fn apply(combobox: &mut Combobox, step: &Step) -> Response {
    debug!(?step, "replay step");
    match step {
        Step::Type(text) => {
            let query = format!("{}{}", combobox.query(), text);
            combobox.handle(Event::Input(query))
        }
        Step::Set(text) => combobox.handle(Event::Input(text.clone())),
        Step::Backspace => {
            let mut query = combobox.query().to_string();
            query.pop();
            combobox.handle(Event::Input(query))
        }
        Step::Key(key) => {
            let response = combobox.handle(Event::Key(*key));
            if *key == Key::Tab && !response.prevent_default && combobox.is_focused() {
                combobox.handle(Event::Blur);
            }
            response
        }
        Step::Focus => combobox.handle(Event::Focus),
        Step::Blur => combobox.handle(Event::Blur),
        Step::Toggle => combobox.handle(Event::ToggleClicked),
        Step::Hover(i) => combobox.handle(Event::OptionHovered(*i)),
        Step::Click(i) => combobox.handle(Event::OptionClicked(*i)),
        Step::Outside => {
            let response = combobox.handle(Event::PointerDownOutside);
            if combobox.is_focused() {
                combobox.handle(Event::Blur);
            }
            response
        }
    }
}

/// Run a whole script; typing and keys need focus, so the input is focused
/// first.
pub fn replay(combobox: &mut Combobox, steps: &[Step]) {
    combobox.handle(Event::Focus);
    for step in steps {
        apply(combobox, step);
    }
}
