//! Status bar rendering widget.
//!
//! This module provides functions for rendering the footer status bar
//! with keybinding hints and the latest notice.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Hints shown while navigating the board.
pub const BOARD_HINTS: &[(&str, &str)] = &[
    ("←→↑↓", "Navigate"),
    ("Enter", "Edit"),
    ("n", "New card"),
    ("c", "New column"),
    ("?", "Help"),
    ("Ctrl+C", "Quit"),
];

/// Hints shown while a form or the edit modal is open.
pub const FORM_HINTS: &[(&str, &str)] = &[
    ("Enter", "Save"),
    ("Tab", "Switch field"),
    ("Esc", "Cancel"),
];

/// Renders the status bar.
///
/// With a notice, the notice comes first and is separated from the hints by
/// a bar.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use quadro_tui::widgets::{BOARD_HINTS, render_status_bar};
///
/// let area = Rect::new(0, 0, 80, 3);
/// let mut buf = Buffer::empty(area);
///
/// render_status_bar(BOARD_HINTS, Some("Card moved to top"), area, &mut buf);
/// ```
pub fn render_status_bar(
    hints: &[(&str, &str)],
    notice: Option<&str>,
    area: Rect,
    buf: &mut Buffer,
) {
    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::White);

    let mut spans = Vec::new();
    if let Some(notice) = notice {
        spans.push(Span::styled(notice.to_string(), Style::default().fg(Color::Cyan)));
        spans.push(Span::styled("  |  ", text_style));
    }
    for (i, (key, text)) in hints.iter().enumerate() {
        let sep = if i + 1 < hints.len() { "  " } else { "" };
        spans.push(Span::styled((*key).to_string(), key_style));
        spans.push(Span::styled(format!(" {text}{sep}"), text_style));
    }

    Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL))
        .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn render_status_bar_contains_hints() {
        let area = Rect::new(0, 0, 80, 3);
        let mut buf = Buffer::empty(area);

        render_status_bar(BOARD_HINTS, None, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Quit"));
        assert!(content.contains("Navigate"));
    }

    #[test]
    fn render_status_bar_with_notice() {
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);

        render_status_bar(&[("Esc", "Cancel")], Some("Card deleted"), area, &mut buf);

        insta::assert_snapshot!(buffer_to_string(&buf), @r"
        ┌──────────────────────────────────────┐
        │Card deleted  |  Esc Cancel           │
        └──────────────────────────────────────┘
        ");
    }
}
