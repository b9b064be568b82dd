//! Card rendering widget.

use quadro_protocol::Card;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// How a card is drawn relative to the selection and an active drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardHighlight {
    /// Nothing special.
    #[default]
    None,
    /// The card is selected in the focused column.
    Selected,
    /// The card is being dragged with the mouse.
    Dragged,
}

/// Renders a card: a bordered box with the title on the first line and the
/// description, truncated to one line, on the second.
///
/// # Examples
///
/// ```
/// use quadro_protocol::{Card, CardId};
/// use quadro_tui::widgets::{CardHighlight, render_card};
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
///
/// let card = Card::new(CardId(1), "Card 1", "Descrição do Card 1");
/// let area = Rect::new(0, 0, 24, 4);
/// let mut buf = Buffer::empty(area);
///
/// render_card(&card, CardHighlight::Selected, area, &mut buf);
/// ```
pub fn render_card(card: &Card, highlight: CardHighlight, area: Rect, buf: &mut Buffer) {
    if area.width < 4 || area.height < 3 {
        return;
    }

    let (border_color, title_style, desc_style) = match highlight {
        CardHighlight::Selected => (
            Color::LightCyan,
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(Color::White),
        ),
        CardHighlight::Dragged => (
            Color::Yellow,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::ITALIC),
            Style::default().fg(Color::DarkGray),
        ),
        CardHighlight::None => (
            Color::DarkGray,
            Style::default().fg(Color::White),
            Style::default().fg(Color::DarkGray),
        ),
    };

    let inner_width = area.width.saturating_sub(2) as usize;
    let content = vec![
        Line::from(Span::styled(
            truncate_string(&card.title, inner_width),
            title_style,
        )),
        Line::from(Span::styled(
            truncate_string(&card.description, inner_width),
            desc_style,
        )),
    ];

    Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        )
        .render(area, buf);
}

/// Truncates a string to `max_width` characters, ending with "..." when cut.
pub(crate) fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width > 3 {
        let truncated: String = s.chars().take(max_width - 3).collect();
        format!("{truncated}...")
    } else {
        s.chars().take(max_width).collect()
    }
}
