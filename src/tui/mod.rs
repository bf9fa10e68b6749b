pub mod app;
pub mod input;
pub mod theme;
pub mod widget;

use std::io::{self, Stdout};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::config::PickerConfig;
use crate::error::{ComboboxError, Result};

pub use app::{App, Selection};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Raw mode, alternate screen and mouse capture for as long as it lives.
///
/// Mouse capture is what delivers pointer-down events outside the widget, so
/// it is released together with the terminal on every exit path.
struct TerminalGuard;

impl TerminalGuard {
    fn acquire() -> Result<Self> {
        enable_raw_mode()?;
        let guard = TerminalGuard;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Entry point: run the interactive picker until the user quits
pub fn run(config: PickerConfig) -> Result<Selection> {
    config.validate()?;

    let _guard = TerminalGuard::acquire()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))
        .map_err(|e| ComboboxError::Terminal(e.to_string()))?;
    terminal.clear()?;

    let mut app = App::new(config);
    app.run(&mut terminal)?;
    terminal.show_cursor()?;

    Ok(app.selection())
}
