//! Terminal rendering of the combobox and hit-testing of its parts.
//!
//! Layout, top to bottom: a label row, a bordered input box with the toggle
//! button at its right edge, and (when open) the option list drawn over
//! whatever sits below.

use ratatui::buffer::Buffer;
use ratatui::layout::{Margin, Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
    StatefulWidget, Widget,
};

use crate::combobox::{Combobox, ListContent};
use crate::tui::input::TextInput;
use crate::tui::theme::Theme;

/// Maximum option rows shown before the list scrolls.
pub const MAX_LIST_ROWS: u16 = 8;
const TOGGLE_WIDTH: u16 = 3;

/// What lies under a pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Toggle,
    Input,
    /// Option row, by position in the filtered list.
    Option(usize),
    /// Inside the widget root but not on anything interactive (list border).
    Inside,
    Outside,
}

/// Screen areas of every part of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComboboxLayout {
    pub label: Rect,
    pub input: Rect,
    pub text: Rect,
    pub toggle: Rect,
    pub list: Option<Rect>,
    pub list_rows: Option<Rect>,
    /// Bounding box of the whole widget; pointer-down outside it closes the list.
    pub root: Rect,
}

fn bordered() -> Block<'static> {
    Block::default().borders(Borders::ALL)
}

impl ComboboxLayout {
    pub fn new(area: Rect, combobox: &Combobox) -> Self {
        let rows: u16 = if combobox.is_open() {
            combobox.filtered_len().clamp(1, MAX_LIST_ROWS as usize) as u16
        } else {
            0
        };

        let label = Rect::new(area.x, area.y, area.width, area.height.min(1));
        let input = Rect::new(area.x, area.y + label.height, area.width, 3).intersection(area);
        let inner = bordered().inner(input);

        let toggle_width = if inner.width > TOGGLE_WIDTH + 1 {
            TOGGLE_WIDTH
        } else {
            0
        };
        let toggle = Rect::new(
            inner.right() - toggle_width,
            inner.y,
            toggle_width,
            inner.height.min(1),
        );
        let text = Rect::new(
            inner.x,
            inner.y,
            inner.width - toggle_width,
            inner.height.min(1),
        );

        let list = if rows > 0 {
            let top = input.bottom();
            let height = (rows + 2).min(area.bottom().saturating_sub(top));
            (height >= 3).then(|| Rect::new(area.x, top, area.width, height))
        } else {
            None
        };
        let list_rows = list.map(|list| bordered().inner(list));

        let head = label.union(input);
        let root = list.map_or(head, |list| head.union(list));

        Self {
            label,
            input,
            text,
            toggle,
            list,
            list_rows,
            root,
        }
    }

    /// Option rows that fit in the list area.
    pub fn visible_rows(&self) -> usize {
        self.list_rows.map_or(0, |rows| rows.height as usize)
    }

    /// Horizontal scroll of the input text that keeps the cursor visible.
    pub fn text_scroll(&self, input: &TextInput) -> u16 {
        input
            .cursor_column()
            .saturating_sub(self.text.width.saturating_sub(1))
    }

    pub fn cursor_position(&self, input: &TextInput) -> Position {
        let column = input.cursor_column() - self.text_scroll(input);
        Position::new(self.text.x + column, self.text.y)
    }

    pub fn hit(&self, column: u16, row: u16, combobox: &Combobox) -> Hit {
        let pos = Position::new(column, row);

        if self.toggle.contains(pos) {
            return Hit::Toggle;
        }
        if self.input.contains(pos) || self.label.contains(pos) {
            return Hit::Input;
        }
        if let Some(rows) = self.list_rows {
            if rows.contains(pos) {
                let index = combobox.viewport().scroll_offset + (row - rows.y) as usize;
                if index < combobox.filtered_len() {
                    return Hit::Option(index);
                }
                return Hit::Inside;
            }
        }
        if self.root.contains(pos) {
            Hit::Inside
        } else {
            Hit::Outside
        }
    }
}

/// Renders a [`Combobox`] together with the text of its input.
pub struct ComboboxView<'a> {
    combobox: &'a Combobox,
    input: &'a TextInput,
    theme: &'a Theme,
}

impl<'a> ComboboxView<'a> {
    pub fn new(combobox: &'a Combobox, input: &'a TextInput, theme: &'a Theme) -> Self {
        Self {
            combobox,
            input,
            theme,
        }
    }

    fn render_list(&self, list: Rect, rows: Rect, buf: &mut Buffer) {
        Clear.render(list, buf);
        bordered()
            .border_style(self.theme.list_border)
            .title(format!(" {} ", self.combobox.label()))
            .render(list, buf);

        let options = match self.combobox.list_content() {
            ListContent::Hidden => return,
            ListContent::NoResults(placeholder) => {
                let row = Rect::new(rows.x, rows.y, rows.width, rows.height.min(1));
                let text = format!(" {}", placeholder.text);
                Paragraph::new(Span::styled(text, self.theme.no_results)).render(row, buf);
                return;
            }
            ListContent::Options(options) => options,
        };

        let range = self.combobox.viewport().visible_range(options.len());
        let start = range.start;
        for (visual, option) in options[range].iter().enumerate() {
            let y = rows.y + visual as u16;
            if y >= rows.bottom() {
                break;
            }

            let style = if option.aria_selected {
                self.theme.option_active
            } else if (start + visual) % 2 == 1 {
                self.theme.option.bg(self.theme.option_alt_bg)
            } else {
                self.theme.option
            };
            let marker = if option.aria_selected { "\u{25B8} " } else { "  " };

            Paragraph::new(Line::from(format!("{}{}", marker, option.text)))
                .style(style)
                .render(Rect::new(rows.x, y, rows.width, 1), buf);
        }

        let visible = rows.height as usize;
        if options.len() > visible {
            let mut state =
                ScrollbarState::new(options.len().saturating_sub(visible)).position(start);
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None)
                .render(
                    list.inner(Margin {
                        vertical: 1,
                        horizontal: 0,
                    }),
                    buf,
                    &mut state,
                );
        }
    }
}

impl Widget for ComboboxView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = ComboboxLayout::new(area, self.combobox);
        let theme = self.theme;

        Paragraph::new(Span::styled(self.combobox.label().to_string(), theme.label))
            .render(layout.label, buf);

        let border_style = if self.combobox.is_focused() {
            theme.border_focused
        } else {
            theme.border_unfocused
        };
        bordered().border_style(border_style).render(layout.input, buf);

        let query = self.combobox.query();
        if query.is_empty() {
            let placeholder = self.combobox.accessibility().input.placeholder;
            Paragraph::new(Span::styled(placeholder, theme.placeholder)).render(layout.text, buf);
        } else {
            Paragraph::new(Span::styled(query.to_string(), theme.input))
                .scroll((0, layout.text_scroll(self.input)))
                .render(layout.text, buf);
        }

        let arrow = if self.combobox.is_open() {
            " \u{25B2} "
        } else {
            " \u{25BC} "
        };
        Paragraph::new(Span::styled(arrow, theme.toggle)).render(layout.toggle, buf);

        if let (Some(list), Some(rows)) = (layout.list, layout.list_rows) {
            self.render_list(list, rows, buf);
        }
    }
}
