//! Item list widget for displaying ranked experiments

use crate::ranking::MatchResult;
use crate::selector::SelectorSession;
use crate::ui::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
};

/// Item list widget that displays the visible window of the ranking
pub struct ItemList<'a> {
    /// Session to read rows, highlight and window from
    session: &'a SelectorSession,
    /// Theme for styling
    theme: &'a Theme,
    /// Title for the list block
    title: String,
    /// Whether to append the combined score to each row
    show_scores: bool,
}

impl<'a> ItemList<'a> {
    /// Create a new item list widget
    #[must_use]
    pub fn new(session: &'a SelectorSession, theme: &'a Theme) -> Self {
        let shown = session.ranked().len();
        let total = session.total();
        let title = format!(" Experiments ({shown}/{total}) ");

        Self {
            session,
            theme,
            title,
            show_scores: true,
        }
    }

    /// Toggle the score column
    #[must_use]
    pub const fn show_scores(mut self, show: bool) -> Self {
        self.show_scores = show;
        self
    }

    /// Render a single row
    fn render_item(&self, item: &MatchResult, is_cursor: bool, width: usize) -> ListItem<'a> {
        let base = if is_cursor {
            self.theme.selected_style()
        } else {
            self.theme.normal_style()
        };
        let cursor_char = if is_cursor { ">" } else { " " };

        let mut spans = vec![
            Span::styled(cursor_char, self.theme.cursor_style()),
            Span::raw(" "),
        ];
        spans.extend(highlight_spans(
            &item.candidate.name,
            &item.matched_indices,
            base,
            base.patch(self.theme.match_style()),
        ));

        if self.show_scores {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let percent = (item.combined_score * 100.0).round() as u32;
            let score = format!(" {percent:>3}%");
            // Display width, so wide characters keep the score column aligned
            let used = spans.iter().map(Span::width).sum::<usize>() + score.len();
            spans.push(Span::styled(" ".repeat(width.saturating_sub(used)), base));
            let score_style = if is_cursor {
                base
            } else {
                self.theme.dimmed_style()
            };
            spans.push(Span::styled(score, score_style));
        }

        let line = Line::from(spans);
        if is_cursor {
            ListItem::new(line).style(self.theme.selected_style())
        } else {
            ListItem::new(line)
        }
    }

    /// Placeholder shown when nothing matches
    fn empty_line(&self) -> Line<'a> {
        let query = self.session.query();
        if query.is_empty() {
            Line::styled(
                "  No experiments yet. Type a name and press Enter to create one.",
                self.theme.dimmed_style(),
            )
        } else {
            Line::from(vec![
                Span::styled("  + ", self.theme.success_style()),
                Span::styled("Create new: ", self.theme.dimmed_style()),
                Span::raw(query.to_string()),
            ])
        }
    }
}

/// Split `name` into spans, styling the characters at `indices` as matches
fn highlight_spans(
    name: &str,
    indices: &[usize],
    base: Style,
    matched: Style,
) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut run = String::new();
    let mut run_matched = false;

    for (i, c) in name.chars().enumerate() {
        let is_match = indices.binary_search(&i).is_ok();
        if is_match != run_matched && !run.is_empty() {
            let style = if run_matched { matched } else { base };
            spans.push(Span::styled(std::mem::take(&mut run), style));
        }
        run_matched = is_match;
        run.push(c);
    }
    if !run.is_empty() {
        spans.push(Span::styled(run, if run_matched { matched } else { base }));
    }

    spans
}

impl Widget for ItemList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(self.title.as_str());

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        if self.session.ranked().is_empty() {
            Paragraph::new(self.empty_line()).render(inner, buf);
            return;
        }

        let start = self.session.viewport_offset();
        let width = inner.width as usize;
        let items: Vec<ListItem> = self
            .session
            .visible()
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let is_cursor = start + i == self.session.highlighted();
                self.render_item(item, is_cursor, width)
            })
            .collect();

        List::new(items).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::CandidateStore;
    use crate::testing::{candidate, now, rendered_lines};
    use ratatui::style::Color;

    fn session(query: &str) -> SelectorSession {
        let store = CandidateStore::new(vec![
            candidate("2025-11-30-redis-server", 1),
            candidate("2025-10-15-red", 2),
            candidate("2025-09-01-kafka", 3),
        ]);
        SelectorSession::new(store, now()).with_query(query)
    }

    fn render(session: &SelectorSession, show_scores: bool) -> Buffer {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 50, 6);
        let mut buf = Buffer::empty(area);
        ItemList::new(session, &theme)
            .show_scores(show_scores)
            .render(area, &mut buf);
        buf
    }

    #[test]
    fn test_title_counts_matches() {
        let buf = render(&session("rds"), true);
        assert!(rendered_lines(&buf)[0].contains("Experiments (1/3)"));
    }

    #[test]
    fn test_cursor_row_and_scores() {
        let s = session("");
        let buf = render(&s, true);
        let lines = rendered_lines(&buf);

        assert!(lines[1].starts_with("│> 2025-11-30-redis-server"));
        assert!(lines[2].starts_with("│  2025-10-15-red"));
        assert!(lines[1].trim_end_matches('│').trim_end().ends_with('%'));
    }

    #[test]
    fn test_scores_can_be_hidden() {
        let buf = render(&session(""), false);
        assert!(!rendered_lines(&buf)[1].contains('%'));
    }

    #[test]
    fn test_matched_characters_are_highlighted() {
        let s = session("rds");
        let indices = s.ranked()[0].matched_indices.clone();
        let buf = render(&s, false);

        // Border, cursor and a space precede the name
        let name_x = 3;
        for (i, _) in "2025-11-30-redis-server".chars().enumerate() {
            let x = name_x + u16::try_from(i).unwrap();
            let expected = if indices.contains(&i) {
                Color::Yellow
            } else {
                Color::White
            };
            assert_eq!(buf[(x, 1)].fg, expected, "column {i}");
        }
    }

    #[test]
    fn test_score_column_aligns_with_wide_names() {
        let store = CandidateStore::new(vec![
            candidate("2025-11-30-実験", 1),
            candidate("2025-11-29-plain", 2),
        ]);
        let s = SelectorSession::new(store, now());
        let buf = render(&s, true);

        // Last inner column, just left of the right border
        assert_eq!(buf[(48, 1)].symbol(), "%");
        assert_eq!(buf[(48, 2)].symbol(), "%");
    }

    #[test]
    fn test_empty_result_offers_create() {
        let buf = render(&session("zzz"), true);
        assert!(rendered_lines(&buf)[1].contains("+ Create new: zzz"));
    }

    #[test]
    fn test_highlight_spans_groups_runs() {
        let spans = highlight_spans("redis", &[0, 1, 4], Style::default(), Style::default());
        let texts: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(texts, vec!["re", "di", "s"]);
    }
}
