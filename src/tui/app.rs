use crate::combobox::{Combobox, Event as WidgetEvent, FocusRequest, Key, Response};
use crate::config::PickerConfig;
use crate::tui::input::TextInput;
use crate::tui::theme::Theme;
use crate::tui::widget::{ComboboxLayout, ComboboxView, Hit};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use std::time::Duration;
use tracing::{debug, info};

/// Width of the widget column on screen
const WIDGET_WIDTH: u16 = 48;

/// Outcome of an interactive session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub label: String,
    pub value: String,
    /// Whether the value came from committing an option (vs free text)
    pub committed: bool,
}

pub struct App {
    pub combobox: Combobox,
    pub input: TextInput,
    pub theme: Theme,
    /// Layout of the last frame, used for pointer hit-testing
    layout: Option<ComboboxLayout>,
    committed: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: PickerConfig) -> Self {
        let mut combobox = Combobox::new(config.options, config.label);
        combobox.handle(WidgetEvent::Focus);

        Self {
            combobox,
            input: TextInput::default(),
            theme: Theme::default(),
            layout: None,
            committed: false,
            should_quit: false,
        }
    }

    pub fn selection(&self) -> Selection {
        Selection {
            label: self.combobox.label().to_string(),
            value: self.combobox.query().to_string(),
            committed: self.committed,
        }
    }

    pub fn run(&mut self, terminal: &mut super::Tui) -> crate::Result<()> {
        let tick_rate = Duration::from_millis(50);

        loop {
            terminal.draw(|frame| self.draw(frame))?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key),
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    _ => {}
                }
            }

            if self.should_quit {
                info!(value = %self.combobox.query(), committed = self.committed, "picker closed");
                return Ok(());
            }
        }
    }

    // --- Drawing ---

    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Heading
                Constraint::Min(4),    // Widget
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let heading = format!(" {} Selection Combobox", self.combobox.label());
        frame.render_widget(
            Paragraph::new(heading).style(Style::default().add_modifier(Modifier::BOLD)),
            chunks[0],
        );

        let widget_area = Rect::new(
            chunks[1].x + 1,
            chunks[1].y,
            WIDGET_WIDTH.min(chunks[1].width.saturating_sub(2)),
            chunks[1].height,
        );
        let layout = ComboboxLayout::new(widget_area, &self.combobox);
        self.combobox.set_visible_rows(layout.visible_rows());
        self.layout = Some(layout);

        frame.render_widget(
            ComboboxView::new(&self.combobox, &self.input, &self.theme),
            widget_area,
        );
        self.draw_status_bar(frame, chunks[2]);

        if self.combobox.is_focused() {
            frame.set_cursor_position(layout.cursor_position(&self.input));
        }
    }

    fn draw_status_bar(&self, frame: &mut Frame, area: Rect) {
        let left_text = match self.combobox.active_option() {
            Some(option) => format!(
                " {} of {} | {}",
                self.combobox.active().map_or(0, |i| i + 1),
                self.combobox.filtered_len(),
                option
            ),
            None => format!(
                " {} of {} options",
                self.combobox.filtered_len(),
                self.combobox.options().len()
            ),
        };

        let right_text = if self.combobox.is_focused() {
            " \u{2191}\u{2193}:Navigate  Enter:Select  Esc:Leave  Ctrl+C:Quit "
        } else {
            " Tab:Focus  Enter:Done  Esc/q:Quit "
        };

        let available_width = area.width as usize;
        let left_len = left_text.chars().count();
        let right_len = right_text.chars().count();

        let status_str = if left_len + right_len < available_width {
            let padding = available_width - left_len - right_len;
            format!("{}{:padding$}{}", left_text, "", right_text, padding = padding)
        } else {
            format!("{:width$}", left_text, width = available_width)
        };

        frame.render_widget(
            Paragraph::new(status_str).style(self.theme.status_bar),
            area,
        );
    }

    // --- Event handling ---

    /// Dispatch a widget event and apply the effects it asks for.
    fn dispatch(&mut self, event: WidgetEvent) -> Response {
        let response = self.combobox.handle(event);
        if response.committed {
            self.committed = true;
            self.input.set_value(self.combobox.query());
        }
        match response.focus {
            Some(FocusRequest::Focus) if !self.combobox.is_focused() => {
                self.combobox.handle(WidgetEvent::Focus);
            }
            Some(FocusRequest::Blur) if self.combobox.is_focused() => {
                self.combobox.handle(WidgetEvent::Blur);
            }
            _ => {}
        }
        response
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Global keys
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q')
                if key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.should_quit = true;
                return;
            }
            _ => {}
        }

        if self.combobox.is_focused() {
            self.handle_input_key(key);
        } else {
            self.handle_unfocused_key(key);
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        let widget_key = match key.code {
            KeyCode::Down => Key::ArrowDown,
            KeyCode::Up => Key::ArrowUp,
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Tab | KeyCode::BackTab => Key::Tab,
            _ => Key::Other,
        };

        let response = self.dispatch(WidgetEvent::Key(widget_key));
        if response.prevent_default {
            return;
        }

        // Default actions
        match widget_key {
            Key::Tab => {
                // Nothing else takes focus, so focus leaves the input.
                self.dispatch(WidgetEvent::Blur);
            }
            Key::Other => {
                if self.input.handle_key(key) {
                    let text = self.input.value().to_string();
                    self.dispatch(WidgetEvent::Input(text));
                }
            }
            _ => {}
        }
    }

    fn handle_unfocused_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => {
                self.should_quit = true;
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Char('/') => {
                self.dispatch(WidgetEvent::Focus);
            }
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let Some(layout) = self.layout else {
            return;
        };
        let hit = layout.hit(mouse.column, mouse.row, &self.combobox);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                debug!(?hit, "pointer down");
                match hit {
                    Hit::Toggle => {
                        self.dispatch(WidgetEvent::ToggleClicked);
                    }
                    Hit::Input => {
                        if !self.combobox.is_focused() {
                            self.dispatch(WidgetEvent::Focus);
                        }
                    }
                    Hit::Option(index) => {
                        self.dispatch(WidgetEvent::OptionClicked(index));
                    }
                    Hit::Inside => {}
                    Hit::Outside => {
                        self.dispatch(WidgetEvent::PointerDownOutside);
                        self.dispatch(WidgetEvent::Blur);
                    }
                }
            }
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                if let Hit::Option(index) = hit {
                    self.dispatch(WidgetEvent::OptionHovered(index));
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn app(options: &[&str]) -> App {
        App::new(PickerConfig {
            label: "Animals".to_string(),
            options: options.iter().map(|s| s.to_string()).collect(),
        })
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn draw(app: &mut App) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        terminal
    }

    fn mouse(app: &mut App, kind: MouseEventKind, column: u16, row: u16) {
        app.handle_mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }

    #[test]
    fn typing_filters_through_the_input() {
        let mut app = app(&["Lion", "Tiger", "Elephant"]);
        type_str(&mut app, "e");
        assert_eq!(app.combobox.query(), "e");
        assert!(app.combobox.is_open());
        assert_eq!(app.combobox.filtered_len(), 2);
    }

    #[test]
    fn keyboard_commit_updates_input() {
        let mut app = app(&["Lion", "Tiger", "Elephant"]);
        type_str(&mut app, "e");
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input.value(), "Elephant");
        assert_eq!(
            app.selection(),
            Selection {
                label: "Animals".into(),
                value: "Elephant".into(),
                committed: true,
            }
        );
        assert!(!app.should_quit);
    }

    #[test]
    fn escape_then_escape_quits() {
        let mut app = app(&["Lion"]);
        press(&mut app, KeyCode::Esc);
        assert!(!app.combobox.is_focused());
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn tab_leaves_and_returns() {
        let mut app = app(&["Lion", "Tiger"]);
        type_str(&mut app, "i");
        press(&mut app, KeyCode::Tab);
        assert!(!app.combobox.is_open());
        assert!(!app.combobox.is_focused());
        press(&mut app, KeyCode::Tab);
        assert!(app.combobox.is_focused());
        assert!(app.combobox.is_open());
    }

    #[test]
    fn key_release_is_ignored() {
        let mut app = app(&["Lion"]);
        let mut key = KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        app.handle_key(key);
        assert_eq!(app.combobox.query(), "");
    }

    #[test]
    fn mouse_hover_and_click() {
        let mut app = app(&["Lion", "Tiger", "Elephant"]);
        type_str(&mut app, "e");
        draw(&mut app);

        // Widget starts at (1, 2): label row, input box rows 3..5, list from row 6.
        mouse(&mut app, MouseEventKind::Moved, 5, 8);
        assert_eq!(app.combobox.active(), Some(1));

        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 5, 7);
        assert_eq!(app.combobox.query(), "Tiger");
        assert!(!app.combobox.is_open());
        assert!(app.combobox.is_focused());
        assert_eq!(app.input.value(), "Tiger");
    }

    #[test]
    fn click_outside_closes_and_blurs() {
        let mut app = app(&["Lion", "Tiger"]);
        type_str(&mut app, "ti");
        draw(&mut app);
        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 55, 15);
        assert!(!app.combobox.is_open());
        assert!(!app.combobox.is_focused());
        assert_eq!(app.combobox.query(), "ti");
    }

    #[test]
    fn label_click_focuses_input() {
        let mut app = app(&["Lion", "Tiger"]);
        type_str(&mut app, "ti");
        draw(&mut app);
        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 55, 15);
        assert!(!app.combobox.is_focused());

        let label = app.layout.unwrap().label;
        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), label.x, label.y);
        assert!(app.combobox.is_focused());
        assert!(app.combobox.is_open());
        assert_eq!(app.combobox.query(), "ti");
    }

    #[test]
    fn toggle_click_opens_list() {
        let mut app = app(&["Lion", "Tiger"]);
        draw(&mut app);
        let toggle = app.layout.unwrap().toggle;
        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), toggle.x + 1, toggle.y);
        assert!(app.combobox.is_open());
        let terminal = draw(&mut app);
        let buffer = terminal.backend().buffer();
        let row: String = (0..60u16).map(|x| buffer[(x, 7u16)].symbol()).collect();
        assert!(row.contains("Lion"));
    }

    #[test]
    fn status_bar_shows_counts() {
        let mut app = app(&["Lion", "Tiger", "Elephant"]);
        type_str(&mut app, "e");
        let terminal = draw(&mut app);
        let buffer = terminal.backend().buffer();
        let row: String = (0..60u16).map(|x| buffer[(x, 19u16)].symbol()).collect();
        assert!(row.contains("2 of 3 options"));
    }
}
