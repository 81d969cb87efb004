//! Confirmation dialog widget for deleting an experiment
//!
//! Modal overlay naming the directory that a confirmed delete will remove
//! recursively.

use crate::store::Candidate;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Confirmation dialog overlay widget
pub struct ConfirmDialog<'a> {
    target: &'a Candidate,
    theme: &'a Theme,
}

impl<'a> ConfirmDialog<'a> {
    /// Create a new confirmation dialog widget
    #[must_use]
    pub const fn new(target: &'a Candidate, theme: &'a Theme) -> Self {
        Self { target, theme }
    }

    /// Calculate centered area for the modal
    fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
        let x = area.x + (area.width.saturating_sub(width)) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        Rect::new(x, y, width.min(area.width), height.min(area.height))
    }

    /// Shorten `text` from the left to fit `max` columns
    fn truncate_left(text: &str, max: usize) -> String {
        let count = text.chars().count();
        if count <= max {
            return text.to_string();
        }
        let keep = max.saturating_sub(3);
        let tail: String = text.chars().skip(count - keep).collect();
        format!("...{tail}")
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let message = format!("Delete {}?", self.target.name);
        let message_width = u16::try_from(message.chars().count() + 4).unwrap_or(u16::MAX);
        let width = message_width
            .clamp(40, 70)
            .min(area.width.saturating_sub(4));
        let height = 9;

        let modal_area = Self::centered_rect(width, height, area);
        Clear.render(modal_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.warning_style())
            .title(" Delete Experiment ")
            .title_alignment(Alignment::Center);

        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Message
            Constraint::Length(1), // Path
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Buttons
            Constraint::Length(1), // Help
        ])
        .split(inner);

        Paragraph::new(message.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White))
            .render(chunks[1], buf);

        let path = self.target.path.display().to_string();
        let path = Self::truncate_left(&path, usize::from(inner.width.saturating_sub(2)));
        Paragraph::new(path)
            .alignment(Alignment::Center)
            .style(self.theme.dimmed_style())
            .render(chunks[2], buf);

        let buttons = Line::from(vec![
            Span::styled(
                " [Y] Yes ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled(
                " [N] No ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        Paragraph::new(buttons)
            .alignment(Alignment::Center)
            .render(chunks[4], buf);

        Paragraph::new("Y/Enter: delete | any other key: keep")
            .style(self.theme.dimmed_style())
            .alignment(Alignment::Center)
            .render(chunks[5], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{candidate, rendered_lines};

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = ConfirmDialog::centered_rect(40, 10, area);
        assert_eq!(rect, Rect::new(30, 15, 40, 10));

        let small = Rect::new(0, 0, 20, 5);
        let rect = ConfirmDialog::centered_rect(40, 10, small);
        assert_eq!(rect, Rect::new(0, 0, 20, 5));
    }

    #[test]
    fn test_truncate_left() {
        assert_eq!(ConfirmDialog::truncate_left("/tries/abc", 20), "/tries/abc");
        assert_eq!(ConfirmDialog::truncate_left("/home/user/tries/abc", 10), "...ies/abc");
    }

    #[test]
    fn test_dialog_names_directory() {
        let theme = Theme::default();
        let target = candidate("2025-11-30-redis", 0);
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);

        ConfirmDialog::new(&target, &theme).render(area, &mut buf);

        let text = rendered_lines(&buf).join("\n");
        assert!(text.contains("Delete Experiment"));
        assert!(text.contains("Delete 2025-11-30-redis?"));
        assert!(text.contains("/tries/2025-11-30-redis"));
        assert!(text.contains("[Y] Yes"));
    }
}
