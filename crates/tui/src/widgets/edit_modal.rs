//! Edit-card modal widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use super::form::{error_line, field_label, hints_line, input_line, render_popup};
use crate::card_form::Field;
use crate::edit_modal::EditModalState;
use crate::layout::centered_rect;

const MODAL_WIDTH: u16 = 56;
const MODAL_HEIGHT: u16 = 12;

/// Renders the edit modal centered in `area`.
///
/// The card's column is shown as a read-only tag above the fields.
///
/// ```text
/// ╭ Edit card ───────────────────────────────────────────╮
/// │                                                      │
/// │  Em progresso                                        │
/// │                                                      │
/// │ Title                                          6/65  │
/// │ › Card 3█                                            │
/// │ Description                                          │
/// │ › Descrição do Card 3                                │
/// │                                                      │
/// │ Enter save  Tab switch field  Esc cancel             │
/// ╰──────────────────────────────────────────────────────╯
/// ```
pub fn render_edit_modal(modal: &EditModalState, area: Rect, buf: &mut Buffer) {
    let popup = centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);
    let width = popup.width.saturating_sub(2) as usize;
    let focus = modal.focus();

    let tag = Line::from(vec![
        Span::raw(" "),
        Span::styled(
            format!(" {} ", modal.column_title()),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let lines = vec![
        Line::from(""),
        tag,
        Line::from(""),
        field_label("Title", Some(modal.title()), focus == Field::Title, width),
        input_line(modal.title(), focus == Field::Title, width),
        field_label("Description", None, focus == Field::Description, width),
        input_line(modal.description(), focus == Field::Description, width),
        Line::from(""),
        error_line(modal.error()),
        hints_line(&[("Enter", "save"), ("Tab", "switch field"), ("Esc", "cancel")]),
    ];

    render_popup(" Edit card ", lines, popup, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use quadro_protocol::{Card, CardId};

    #[test]
    fn modal_shows_column_tag_and_drafts() {
        let card = Card::new(CardId(3), "Card 3", "Descrição do Card 3");
        let modal = EditModalState::open(&card, "Em progresso");
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);

        render_edit_modal(&modal, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Edit card"));
        assert!(content.contains(" Em progresso "));
        assert!(content.contains("Card 3"));
        assert!(content.contains("Descrição do Card 3"));
    }

    #[test]
    fn modal_shows_validation_error() {
        let card = Card::new(CardId(1), "abc", "");
        let mut modal = EditModalState::open(&card, "A Fazer");
        modal.backspace();
        let _ = modal.confirm();

        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        render_edit_modal(&modal, area, &mut buf);

        assert!(buffer_to_string(&buf).contains("at least 3 characters"));
    }
}
