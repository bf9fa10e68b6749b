use ratatui::style::{Color, Modifier, Style};

/// Styles used by the combobox widget and the picker screen.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub label: Style,
    pub input: Style,
    pub placeholder: Style,
    pub border_focused: Style,
    pub border_unfocused: Style,
    pub toggle: Style,
    pub option: Style,
    pub option_alt_bg: Color,
    pub option_active: Style,
    pub no_results: Style,
    pub list_border: Style,
    pub status_bar: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            label: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            input: Style::default().fg(Color::White),
            placeholder: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
            border_focused: Style::default().fg(Color::Cyan),
            border_unfocused: Style::default().fg(Color::DarkGray),
            toggle: Style::default().fg(Color::Cyan),
            option: Style::default().fg(Color::White),
            option_alt_bg: Color::Rgb(25, 25, 35),
            option_active: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            no_results: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
            list_border: Style::default().fg(Color::Cyan),
            status_bar: Style::default().fg(Color::White).bg(Color::Rgb(40, 40, 50)),
        }
    }
}
