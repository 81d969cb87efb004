//! Status bar widget for displaying messages

use crate::selector::{MessageLevel, StatusMessage};
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Status bar widget that displays the latest session message
pub struct StatusBar<'a> {
    /// Message to display
    message: Option<&'a StatusMessage>,
    /// Theme for styling
    theme: &'a Theme,
    /// Experiments directory shown on the right
    location: Option<&'a str>,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar widget
    #[must_use]
    pub const fn new(message: Option<&'a StatusMessage>, theme: &'a Theme) -> Self {
        Self {
            message,
            theme,
            location: None,
        }
    }

    /// Show the experiments directory on the right
    #[must_use]
    pub const fn with_location(mut self, location: Option<&'a str>) -> Self {
        self.location = location;
        self
    }

    /// Get style for a message level
    fn style_for_level(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Success => self.theme.success_style(),
            MessageLevel::Error => self.theme.error_style(),
        }
    }

    /// Get prefix for a message level
    const fn prefix_for_level(level: MessageLevel) -> &'static str {
        match level {
            MessageLevel::Success => "✓ ",
            MessageLevel::Error => "✗ ",
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(" Status ");

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(inner);

        if let Some(msg) = self.message {
            let style = self.style_for_level(msg.level);
            let line = Line::from(vec![
                Span::styled(Self::prefix_for_level(msg.level), style),
                Span::styled(msg.text.as_str(), style),
            ]);
            Paragraph::new(line).render(chunks[0], buf);
        }

        if let Some(location) = self.location {
            Paragraph::new(Line::styled(location, self.theme.dimmed_style()))
                .alignment(ratatui::layout::Alignment::Right)
                .render(chunks[1], buf);
        }
    }
}
