//! Search bar widget for query input

use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search bar widget that displays the query with a trailing cursor
pub struct SearchBar<'a> {
    /// Current query text
    query: &'a str,
    /// Prompt text
    prompt: &'a str,
    /// Theme for styling
    theme: &'a Theme,
    /// Whether the widget has focus
    focused: bool,
}

impl<'a> SearchBar<'a> {
    /// Create a new search bar widget
    #[must_use]
    pub const fn new(query: &'a str, prompt: &'a str, theme: &'a Theme) -> Self {
        Self {
            query,
            prompt,
            theme,
            focused: true,
        }
    }

    /// Set focus state
    #[must_use]
    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.cursor_style()
        } else {
            self.theme.border_style()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Search ");

        let inner = block.inner(area);
        block.render(area, buf);

        // Query edits only ever append or pop, so the cursor lives at the end
        let mut spans = vec![
            Span::styled(self.prompt, self.theme.dimmed_style()),
            Span::raw(" "),
            Span::raw(self.query),
        ];
        if self.focused {
            spans.push(Span::styled(
                "│",
                Style::default().add_modifier(Modifier::SLOW_BLINK),
            ));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::rendered_lines;

    #[test]
    fn test_renders_prompt_and_query() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);

        SearchBar::new("redis", "Try:", &theme).render(area, &mut buf);

        let lines = rendered_lines(&buf);
        assert!(lines[0].contains("Search"));
        assert!(lines[1].contains("Try: redis│"));
    }

    #[test]
    fn test_unfocused_hides_cursor() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 30, 3);
        let mut buf = Buffer::empty(area);

        SearchBar::new("redis", "Try:", &theme)
            .focused(false)
            .render(area, &mut buf);

        let lines = rendered_lines(&buf);
        assert!(lines[1].contains("Try: redis "));
        assert!(!lines[1].contains("redis│"));
    }
}
