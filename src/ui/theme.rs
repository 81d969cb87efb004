//! Color theme definitions for the selector TUI
//!
//! Defines colors and styles used throughout the interface.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Background color for the highlighted row
    pub selection_bg: Color,
    /// Foreground color for the highlighted row
    pub selection_fg: Color,
    /// Color for matched characters in fuzzy search
    pub match_highlight: Color,
    /// Color for the cursor indicator
    pub cursor: Color,
    /// Color for success messages
    pub success: Color,
    /// Color for error messages
    pub error: Color,
    /// Color for the delete confirmation
    pub warning: Color,
    /// Color for borders
    pub border: Color,
    /// Color for dimmed/inactive text
    pub dimmed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Create a dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            selection_bg: Color::Blue,
            selection_fg: Color::White,
            match_highlight: Color::Yellow,
            cursor: Color::Cyan,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            border: Color::DarkGray,
            dimmed: Color::DarkGray,
        }
    }

    /// Style for the highlighted row
    #[must_use]
    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selection_bg)
            .fg(self.selection_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for other rows
    #[must_use]
    pub fn normal_style(&self) -> Style {
        Style::default()
    }

    /// Style for the cursor indicator (>)
    #[must_use]
    pub fn cursor_style(&self) -> Style {
        Style::default()
            .fg(self.cursor)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for matched characters in fuzzy search
    #[must_use]
    pub fn match_style(&self) -> Style {
        Style::default()
            .fg(self.match_highlight)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    /// Style for success messages
    #[must_use]
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Style for error messages
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for the confirmation dialog frame
    #[must_use]
    pub fn warning_style(&self) -> Style {
        Style::default()
            .fg(self.warning)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for borders
    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for dimmed text
    #[must_use]
    pub fn dimmed_style(&self) -> Style {
        Style::default().fg(self.dimmed)
    }
}
