use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::UnicodeWidthStr;

/// Editable single-line text with a byte-offset cursor.
///
/// This is the "native" text editing the combobox leaves to its host.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    value: String,
    cursor_pos: usize,
}

impl TextInput {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor_pos
    }

    /// Display column of the cursor.
    pub fn cursor_column(&self) -> u16 {
        self.value[..self.cursor_pos].width() as u16
    }

    /// Replace the whole value and move the cursor to the end.
    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.cursor_pos = self.value.len();
    }

    fn prev_boundary(&self) -> usize {
        self.value[..self.cursor_pos]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.value[self.cursor_pos..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| self.cursor_pos + i)
            .unwrap_or(self.value.len())
    }

    /// Apply an editing key. Returns `true` if the text changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.value.insert(self.cursor_pos, c);
                self.cursor_pos += c.len_utf8();
                true
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if self.cursor_pos == 0 {
                    return false;
                }
                self.value.drain(..self.cursor_pos);
                self.cursor_pos = 0;
                true
            }
            KeyCode::Backspace => {
                if self.cursor_pos == 0 {
                    return false;
                }
                let prev = self.prev_boundary();
                self.value.remove(prev);
                self.cursor_pos = prev;
                true
            }
            KeyCode::Delete => {
                if self.cursor_pos >= self.value.len() {
                    return false;
                }
                self.value.remove(self.cursor_pos);
                true
            }
            KeyCode::Left => {
                self.cursor_pos = self.prev_boundary();
                false
            }
            KeyCode::Right => {
                if self.cursor_pos < self.value.len() {
                    self.cursor_pos = self.next_boundary();
                }
                false
            }
            KeyCode::Home => {
                self.cursor_pos = 0;
                false
            }
            KeyCode::End => {
                self.cursor_pos = self.value.len();
                false
            }
            _ => false,
        }
    }
}
