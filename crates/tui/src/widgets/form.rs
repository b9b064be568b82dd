//! Add-card and add-column form popups.
//!
//! Both forms are small centered popups drawn over the board. Each field is a
//! label line followed by the input line; the focused input shows a block
//! cursor. The inline validation message, if any, sits above the key hints.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use super::card::truncate_string;
use crate::card_form::{CardFormState, Field};
use crate::column_form::ColumnFormState;
use crate::input::TextInput;
use crate::layout::centered_rect;

const FORM_WIDTH: u16 = 50;
const CARD_FORM_HEIGHT: u16 = 10;
const COLUMN_FORM_HEIGHT: u16 = 8;

/// Renders the add-card form centered in `area`.
///
/// ```text
/// ╭ New card · A Fazer ────────────────────────────╮
/// │                                                │
/// │ Title                                    6/65  │
/// │ › Card 5█                                      │
/// │ Description                                    │
/// │ ›                                              │
/// │                                                │
/// │ Enter save  Tab switch field  Esc cancel       │
/// ╰────────────────────────────────────────────────╯
/// ```
pub fn render_card_form(form: &CardFormState, area: Rect, buf: &mut Buffer) {
    let popup = centered_rect(FORM_WIDTH, CARD_FORM_HEIGHT, area);
    let width = popup.width.saturating_sub(2) as usize;

    let mut lines = vec![Line::from("")];
    lines.push(field_label("Title", Some(form.title()), form.focus() == Field::Title, width));
    lines.push(input_line(form.title(), form.focus() == Field::Title, width));
    lines.push(field_label("Description", None, form.focus() == Field::Description, width));
    lines.push(input_line(form.description(), form.focus() == Field::Description, width));
    lines.push(Line::from(""));
    lines.push(error_line(form.error()));
    lines.push(hints_line(&[("Enter", "save"), ("Tab", "switch field"), ("Esc", "cancel")]));

    render_popup(
        &format!(" New card · {} ", form.column_title()),
        lines,
        popup,
        buf,
    );
}

/// Renders the add-column form centered in `area`.
pub fn render_column_form(form: &ColumnFormState, area: Rect, buf: &mut Buffer) {
    let popup = centered_rect(FORM_WIDTH, COLUMN_FORM_HEIGHT, area);
    let width = popup.width.saturating_sub(2) as usize;

    let lines = vec![
        Line::from(""),
        field_label("Title", Some(form.title()), true, width),
        input_line(form.title(), true, width),
        Line::from(""),
        error_line(form.error()),
        hints_line(&[("Enter", "add column"), ("Esc", "cancel")]),
    ];

    render_popup(" New column ", lines, popup, buf);
}

/// Clears `popup` and draws a titled, rounded block holding `lines`.
pub(crate) fn render_popup(title: &str, lines: Vec<Line<'_>>, popup: Rect, buf: &mut Buffer) {
    Clear.render(popup, buf);

    let block = Block::default()
        .title(Span::styled(
            title.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Left)
        .render(popup, buf);
}

/// A field label, with a `used/max` counter on the right for capped inputs.
pub(crate) fn field_label(
    label: &str,
    counter: Option<&TextInput>,
    focused: bool,
    width: usize,
) -> Line<'static> {
    let label_style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let mut spans = vec![Span::raw(" "), Span::styled(label.to_string(), label_style)];
    if let Some(input) = counter
        && let Some(max) = input.max_chars()
    {
        let count = format!("{}/{max} ", input.value().chars().count());
        let used = 1 + label.chars().count() + count.chars().count();
        spans.push(Span::raw(" ".repeat(width.saturating_sub(used))));
        spans.push(Span::styled(count, Style::default().fg(Color::DarkGray)));
    }
    Line::from(spans)
}

/// The input line, scrolled so the cursor stays in view.
pub(crate) fn input_line(input: &TextInput, focused: bool, width: usize) -> Line<'static> {
    const PREFIX: &str = " › ";
    let room = width.saturating_sub(PREFIX.chars().count());
    let prefix = Span::styled(PREFIX, Style::default().fg(Color::DarkGray));

    if !focused {
        return Line::from(vec![
            prefix,
            Span::styled(
                truncate_string(input.value(), room),
                Style::default().fg(Color::Gray),
            ),
        ]);
    }

    let before = input.before_cursor();
    let mut after = input.value()[input.cursor()..].chars();
    let under_cursor = after.next().unwrap_or(' ');

    let keep = room.saturating_sub(1);
    let skip = before.chars().count().saturating_sub(keep);
    let visible_before: String = before.chars().skip(skip).collect();
    let left = keep.saturating_sub(visible_before.chars().count());
    let visible_after: String = after.take(left).collect();

    Line::from(vec![
        prefix,
        Span::styled(visible_before, Style::default().fg(Color::White)),
        Span::styled(
            under_cursor.to_string(),
            Style::default().add_modifier(Modifier::REVERSED),
        ),
        Span::styled(visible_after, Style::default().fg(Color::White)),
    ])
}

pub(crate) fn error_line(error: Option<&str>) -> Line<'static> {
    match error {
        Some(message) => Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::LightRed),
        )),
        None => Line::from(""),
    }
}

pub(crate) fn hints_line(hints: &[(&str, &str)]) -> Line<'static> {
    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::DarkGray);

    let mut spans = vec![Span::raw(" ")];
    for (key, text) in hints {
        spans.push(Span::styled((*key).to_string(), key_style));
        spans.push(Span::styled(format!(" {text}  "), text_style));
    }
    Line::from(spans)
}
