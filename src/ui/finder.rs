//! Ratatui-based selector front end
//!
//! Owns the terminal for the duration of one session. The alternate screen is
//! drawn on stderr so that stdout stays free for the `cd` line the shell
//! wrapper evaluates.

use super::error::{Result, UiError};
use super::events::{self, TerminalEvent};
use super::theme::Theme;
use super::traits::InteractiveSelector;
use super::widgets::{ConfirmDialog, HelpBar, ItemList, SearchBar, StatusBar};
use crate::selector::{Mode, Outcome, SelectorSession};
use crate::store::DirectoryRemover;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
};
use std::io::{self, IsTerminal, Stderr};
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Terminal selector drawn with ratatui
#[derive(Debug, Clone)]
pub struct TerminalSelector {
    theme: Theme,
    prompt: String,
    show_scores: bool,
    location: Option<String>,
}

impl TerminalSelector {
    /// Create a new terminal selector
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
            prompt: "Try:".to_string(),
            show_scores: true,
            location: None,
        }
    }

    /// Toggle the per-row score column
    #[must_use]
    pub const fn with_scores(mut self, show: bool) -> Self {
        self.show_scores = show;
        self
    }

    /// Show the experiments directory in the status bar
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stderr>>> {
        enable_raw_mode()?;
        let mut stderr = io::stderr();
        execute!(stderr, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stderr);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stderr(), DisableMouseCapture, LeaveAlternateScreen)?;
        Ok(())
    }

    /// Split the screen into search bar, list, status bar and hints
    fn layout(area: Rect) -> [Rect; 4] {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search bar
                Constraint::Min(3),    // Result list
                Constraint::Length(3), // Status bar
                Constraint::Length(1), // Help bar
            ])
            .split(area);
        [chunks[0], chunks[1], chunks[2], chunks[3]]
    }

    /// Rows available inside the bordered list for a screen of `area`
    fn list_rows(area: Rect) -> usize {
        let [_, list, _, _] = Self::layout(area);
        usize::from(list.height.saturating_sub(2))
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame, session: &SelectorSession) {
        let [search, list, status, help] = Self::layout(frame.area());
        let confirming = session.pending_delete().is_some();

        let search_bar =
            SearchBar::new(session.query(), &self.prompt, &self.theme).focused(!confirming);
        frame.render_widget(search_bar, search);

        let item_list = ItemList::new(session, &self.theme).show_scores(self.show_scores);
        frame.render_widget(item_list, list);

        let status_bar = StatusBar::new(session.status(), &self.theme)
            .with_location(self.location.as_deref());
        frame.render_widget(status_bar, status);

        let hints = HelpBar::hints_for(session.mode());
        frame.render_widget(HelpBar::new(&hints, &self.theme), help);

        if let Some(target) = session.pending_delete() {
            frame.render_widget(ConfirmDialog::new(target, &self.theme), frame.area());
        }
    }

    /// Run the selector event loop
    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
        session: &mut SelectorSession,
        remover: &dyn DirectoryRemover,
    ) -> Result<Outcome> {
        let size = terminal.size()?;
        session.set_visible_rows(Self::list_rows(Rect::new(0, 0, size.width, size.height)));

        loop {
            terminal.draw(|frame| self.render(frame, session))?;

            match events::poll(session.mode(), POLL_INTERVAL)? {
                TerminalEvent::Input(input) => {
                    session.handle(input, remover);
                }
                TerminalEvent::Resize => {
                    let size = terminal.size()?;
                    session.set_visible_rows(Self::list_rows(Rect::new(
                        0,
                        0,
                        size.width,
                        size.height,
                    )));
                }
                TerminalEvent::Idle => {}
            }

            if let Mode::Exiting(outcome) = session.mode() {
                return Ok(outcome.clone());
            }
        }
    }
}

impl Default for TerminalSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractiveSelector for TerminalSelector {
    fn run(
        &self,
        session: &mut SelectorSession,
        remover: &dyn DirectoryRemover,
    ) -> Result<Outcome> {
        if !io::stderr().is_terminal() {
            return Err(UiError::NotATerminal);
        }

        // Setup terminal
        let mut terminal = Self::setup_terminal()?;

        // Run the event loop, ensuring cleanup happens
        let result = self.run_loop(&mut terminal, session, remover);

        // Cleanup terminal (always, even on error)
        if let Err(e) = Self::cleanup_terminal() {
            tracing::warn!(error = %e, "terminal cleanup failed");
            eprintln!("Warning: terminal cleanup failed: {e}");
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::CandidateStore;
    use crate::testing::{candidate, now, rendered_lines};
    use ratatui::backend::TestBackend;

    #[test]
    fn test_list_rows_from_screen_height() {
        // 3 search + 3 status + 1 help + 2 list borders
        assert_eq!(TerminalSelector::list_rows(Rect::new(0, 0, 80, 24)), 15);
        assert_eq!(TerminalSelector::list_rows(Rect::new(0, 0, 80, 40)), 31);
    }

    #[test]
    fn test_render_full_screen() {
        let store = CandidateStore::new(vec![
            candidate("2025-11-30-redis-server", 1),
            candidate("2025-09-01-kafka", 2),
        ]);
        let mut session = SelectorSession::new(store, now()).with_query("red");
        session.set_visible_rows(TerminalSelector::list_rows(Rect::new(0, 0, 60, 16)));

        let selector = TerminalSelector::new().with_location("/tries");
        let mut terminal = Terminal::new(TestBackend::new(60, 16)).unwrap();
        terminal
            .draw(|frame| selector.render(frame, &session))
            .unwrap();

        let text = rendered_lines(terminal.backend().buffer()).join("\n");
        assert!(text.contains("Try: red"));
        assert!(text.contains("> 2025-11-30-redis-server"));
        assert!(!text.contains("kafka"));
        assert!(text.contains("/tries"));
        assert!(text.contains("Enter:select or create"));
    }
}
