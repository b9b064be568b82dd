//! Help overlay widget.
//!
//! Lists every keybinding when the user presses `?`.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::layout::centered_rect;

/// The width of the help overlay panel.
const HELP_WIDTH: u16 = 40;

/// The height of the help overlay panel.
const HELP_HEIGHT: u16 = 23;

/// Renders a centered help overlay displaying all keybindings.
///
/// The overlay is rendered on top of the existing content, clearing the
/// area behind it first.
///
/// # Layout
///
/// ```text
/// ╭ Help ────────────────────────────────╮
/// │  Navigation                          │
/// │  ← →        Switch column            │
/// │  ↑ ↓        Select card              │
/// │                                      │
/// │  Cards                               │
/// │  Enter      Edit card                │
/// │  n          New card                 │
/// │  ...                                 │
/// │  Press any key to close              │
/// ╰──────────────────────────────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use quadro_tui::widgets::render_help_overlay;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
///
/// render_help_overlay(area, &mut buf);
/// ```
pub fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    let popup_area = centered_rect(HELP_WIDTH, HELP_HEIGHT, area);

    Clear.render(popup_area, buf);

    let help_block = Block::default()
        .title(Span::styled(
            " Help ",
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightYellow));

    Paragraph::new(build_help_lines())
        .block(help_block)
        .alignment(Alignment::Left)
        .render(popup_area, buf);
}

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    ("Navigation", &[("← →", "Switch column"), ("↑ ↓", "Select card")]),
    (
        "Cards",
        &[
            ("Enter", "Edit card"),
            ("n", "New card"),
            ("d", "Delete card"),
            ("t", "Move to top"),
            ("Drag", "Move to column"),
        ],
    ),
    ("Columns", &[("c", "New column"), ("D", "Delete column")]),
    (
        "General",
        &[("Esc", "Clear selection"), ("?", "Toggle help"), ("Ctrl+C", "Quit")],
    ),
];

/// Builds the lines of help content.
fn build_help_lines() -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Green);
    let text_style = Style::default().fg(Color::White);
    let hint_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);

    let mut lines = Vec::new();
    for (title, bindings) in SECTIONS {
        lines.push(Line::from(Span::styled(format!("  {title}"), header_style)));
        for (key, text) in *bindings {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<11}"), key_style),
                Span::styled(*text, text_style),
            ]));
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled("  Press any key to close", hint_style)));
    lines
}
