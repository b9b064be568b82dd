//! Blocking alert overlay.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::layout::centered_rect;

const ALERT_WIDTH: u16 = 44;
const ALERT_HEIGHT: u16 = 7;

/// Renders a centered alert box with `message`.
///
/// The alert sits above every other overlay and is dismissed by any key.
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use quadro_tui::widgets::render_alert;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let mut buf = Buffer::empty(area);
///
/// render_alert("column \"A Fazer\" already exists", area, &mut buf);
/// ```
pub fn render_alert(message: &str, area: Rect, buf: &mut Buffer) {
    let popup = centered_rect(ALERT_WIDTH, ALERT_HEIGHT, area);
    Clear.render(popup, buf);

    let block = Block::default()
        .title(Span::styled(
            " Alert ",
            Style::default()
                .fg(Color::LightRed)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightRed));

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(message.to_string(), Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to continue",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
    ];

    Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(popup, buf);
}
