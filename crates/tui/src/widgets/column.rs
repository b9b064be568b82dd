//! Column rendering widget.
//!
//! Adjacent columns share their vertical borders: every column draws its
//! left edge and only the last one draws a right edge.

use quadro_protocol::{CardId, Column};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use super::card::{CardHighlight, render_card};
use crate::layout::card_slots;

/// Position of a column in the horizontal layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnPosition {
    /// The board has a single column: a plain rounded box.
    Only,
    /// First (leftmost) column: rounded corners on the left, no right border.
    First,
    /// Middle columns: T-connectors on the left, no right border.
    Middle,
    /// Last (rightmost) column: T-connectors on the left, rounded on the right.
    Last,
}

impl ColumnPosition {
    /// Returns the position of column `idx` on a board of `count` columns.
    #[must_use]
    pub const fn of(idx: usize, count: usize) -> Self {
        if count <= 1 {
            Self::Only
        } else if idx == 0 {
            Self::First
        } else if idx + 1 >= count {
            Self::Last
        } else {
            Self::Middle
        }
    }

    fn borders(self) -> Borders {
        match self {
            Self::Only | Self::Last => Borders::ALL,
            Self::First | Self::Middle => Borders::TOP | Borders::BOTTOM | Borders::LEFT,
        }
    }
}

const BORDER_SET_FIRST: border::Set = border::Set {
    top_left: "╭",
    top_right: "─",
    bottom_left: "╰",
    bottom_right: "─",
    vertical_left: "│",
    vertical_right: " ",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

const BORDER_SET_MIDDLE: border::Set = border::Set {
    top_left: "┬",
    top_right: "─",
    bottom_left: "┴",
    bottom_right: "─",
    vertical_left: "│",
    vertical_right: " ",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

const BORDER_SET_LAST: border::Set = border::Set {
    top_left: "┬",
    top_right: "╮",
    bottom_left: "┴",
    bottom_right: "╯",
    vertical_left: "│",
    vertical_right: "│",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

fn column_block(position: ColumnPosition) -> Block<'static> {
    let block = Block::default().borders(position.borders());
    match position {
        ColumnPosition::Only => block.border_type(BorderType::Rounded),
        ColumnPosition::First => block.border_set(BORDER_SET_FIRST),
        ColumnPosition::Middle => block.border_set(BORDER_SET_MIDDLE),
        ColumnPosition::Last => block.border_set(BORDER_SET_LAST),
    }
}

/// Returns the visible cards of a column and where each one is drawn.
///
/// Shared by rendering and mouse hit-testing.
#[must_use]
pub fn card_areas(
    column: &Column,
    selected_idx: Option<usize>,
    area: Rect,
    position: ColumnPosition,
) -> Vec<(usize, Rect)> {
    let inner = column_block(position).inner(area);
    card_slots(inner, column.len(), selected_idx)
}

/// Focus and drag information for rendering one column.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnView {
    /// Whether this column currently has focus.
    pub is_focused: bool,
    /// Whether the column to the left has focus, for the shared border.
    pub prev_focused: bool,
    /// Index of the selected card, if the column has focus.
    pub selected_idx: Option<usize>,
    /// Card being dragged, wherever it is.
    pub dragging: Option<CardId>,
}

/// Renders a column: a header with title and card count, then the cards.
///
/// User-created columns carry a `D ✕` marker in the top-right corner when
/// focused, since only they can be deleted. Empty columns show a placeholder.
///
/// # Layout
///
/// ```text
/// ╭A Fazer (2)────────┬Em progresso (1)──
/// │┌────────────────┐ │┌────────────────┐
/// ││Card 1          │ ││Card 3          │
/// ││Descrição do ...│ ││Descrição do ...│
/// │└────────────────┘ │└────────────────┘
/// ```
pub fn render_column(
    column: &Column,
    view: ColumnView,
    area: Rect,
    buf: &mut Buffer,
    position: ColumnPosition,
) {
    let accent = if view.is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let title_style = if view.is_focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let title = format!("{} ({})", column.title, column.len());
    let mut block = column_block(position)
        .title(Span::styled(title, title_style))
        .border_style(Style::default().fg(accent));
    if view.is_focused && column.is_deletable() {
        block = block.title_top(
            Line::from(Span::styled(" D ✕ ", Style::default().fg(Color::Red))).right_aligned(),
        );
    }

    let inner_area = block.inner(area);
    block.render(area, buf);

    // The left edge is shared with the previous column.
    if view.prev_focused && !view.is_focused && area.width > 0 {
        let highlight_style = Style::default().fg(Color::Cyan);
        for y in area.y..area.y.saturating_add(area.height) {
            if let Some(cell) = buf.cell_mut((area.x, y)) {
                cell.set_style(highlight_style);
            }
        }
    }

    if column.is_empty() {
        render_empty_placeholder(inner_area, buf);
        return;
    }

    for (idx, card_area) in card_slots(inner_area, column.len(), view.selected_idx) {
        let card = &column.cards[idx];
        let highlight = if view.dragging == Some(card.id) {
            CardHighlight::Dragged
        } else if view.is_focused && view.selected_idx == Some(idx) {
            CardHighlight::Selected
        } else {
            CardHighlight::None
        };
        render_card(card, highlight, card_area, buf);
    }
}

fn render_empty_placeholder(area: Rect, buf: &mut Buffer) {
    Paragraph::new(Line::from(Span::styled(
        "No cards",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )))
    .render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use quadro_protocol::{Card, ColumnId};

    fn column_with_cards(n: u64) -> Column {
        let mut column = Column::seeded(ColumnId(1), "A Fazer");
        for i in 1..=n {
            column
                .cards
                .push(Card::new(CardId(i), format!("Card {i}"), ""));
        }
        column
    }

    #[test]
    fn position_of_index() {
        assert_eq!(ColumnPosition::of(0, 1), ColumnPosition::Only);
        assert_eq!(ColumnPosition::of(0, 3), ColumnPosition::First);
        assert_eq!(ColumnPosition::of(1, 3), ColumnPosition::Middle);
        assert_eq!(ColumnPosition::of(2, 3), ColumnPosition::Last);
    }

    #[test]
    fn render_empty_column() {
        let column = Column::new(ColumnId(4), "Bloqueado");
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);

        render_column(&column, ColumnView::default(), area, &mut buf, ColumnPosition::First);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Bloqueado (0)"));
        assert!(content.contains("No cards"));
    }

    #[test]
    fn render_column_with_cards() {
        let column = column_with_cards(2);
        let area = Rect::new(0, 0, 25, 12);
        let mut buf = Buffer::empty(area);

        let view = ColumnView {
            is_focused: true,
            selected_idx: Some(0),
            ..ColumnView::default()
        };
        render_column(&column, view, area, &mut buf, ColumnPosition::Middle);

        let content = buffer_to_string(&buf);
        assert!(content.contains("A Fazer (2)"));
        assert!(content.contains("Card 1"));
        assert!(content.contains("Card 2"));
    }

    #[test]
    fn delete_marker_only_on_user_columns() {
        let area = Rect::new(0, 0, 30, 8);
        let view = ColumnView {
            is_focused: true,
            ..ColumnView::default()
        };

        let mut buf = Buffer::empty(area);
        render_column(&column_with_cards(0), view, area, &mut buf, ColumnPosition::Only);
        assert!(!buffer_to_string(&buf).contains('✕'));

        let mut buf = Buffer::empty(area);
        let user = Column::new(ColumnId(4), "Bloqueado");
        render_column(&user, view, area, &mut buf, ColumnPosition::Only);
        assert!(buffer_to_string(&buf).contains('✕'));
    }

    #[test]
    fn card_areas_match_inner_layout() {
        let column = column_with_cards(3);
        let area = Rect::new(10, 3, 20, 14);

        let areas = card_areas(&column, None, area, ColumnPosition::First);

        assert_eq!(areas.len(), 3);
        assert_eq!(areas[0], (0, Rect::new(11, 4, 19, 4)));
        assert_eq!(areas[2].1.y, 12);
    }

    #[test]
    fn card_areas_for_last_column_exclude_right_border() {
        let column = column_with_cards(1);
        let area = Rect::new(0, 0, 20, 10);

        let areas = card_areas(&column, None, area, ColumnPosition::Last);

        assert_eq!(areas, vec![(0, Rect::new(1, 1, 18, 4))]);
    }
}
