//! Full-screen chart display

use std::io;

use boxoffice_core::{Chart, ChartPresenter};
use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use crate::keybindings::{chart_action, Action};
use crate::views;

/// Draws charts on the controlling terminal
///
/// The terminal is put in raw mode on the alternate screen for the lifetime
/// of one chart and restored before returning to the menu.
pub struct TerminalPresenter;

impl ChartPresenter for TerminalPresenter {
    fn present(&mut self, chart: &Chart) -> io::Result<()> {
        tracing::debug!("Presenting chart {:?}", chart.title());

        enable_raw_mode()?;
        let shown = execute!(io::stdout(), EnterAlternateScreen)
            .and_then(|_| Terminal::new(CrosstermBackend::new(io::stdout())))
            .and_then(|mut terminal| show(&mut terminal, chart));

        // Restore even when drawing failed
        let restored = restore();
        shown.and(restored)
    }
}

fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)
}

/// Redraw `chart` until a close key is pressed
fn show<B: Backend>(terminal: &mut Terminal<B>, chart: &Chart) -> io::Result<()> {
    loop {
        terminal.draw(|frame| views::render_chart(frame, frame.area(), chart))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && chart_action(key.code) == Some(Action::Close) {
                return Ok(());
            }
        }
    }
}
