//! Kanban board rendering widget.
//!
//! Renders every column of the board side by side, each taking an equal
//! share of the width.

use quadro_protocol::{Board, CardId};
use ratatui::{buffer::Buffer, layout::Rect};

use super::column::{ColumnPosition, ColumnView, render_column};
use crate::layout::column_areas;

/// Renders the board.
///
/// # Arguments
///
/// * `board` - The board to render
/// * `selected_column` - Index of the focused column
/// * `selected_card` - Index of the selected card within the focused column
/// * `dragging` - Card currently being dragged, if any
/// * `area` - The rectangular area to render into
/// * `buf` - The buffer to render into
///
/// # Examples
///
/// ```
/// use quadro_protocol::seed::seeded_board;
/// use quadro_tui::widgets::render_board;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
///
/// let board = seeded_board(true);
/// let area = Rect::new(0, 0, 90, 20);
/// let mut buf = Buffer::empty(area);
///
/// render_board(&board, 0, Some(0), None, area, &mut buf);
/// ```
pub fn render_board(
    board: &Board,
    selected_column: usize,
    selected_card: Option<usize>,
    dragging: Option<CardId>,
    area: Rect,
    buf: &mut Buffer,
) {
    let count = board.columns.len();
    for (i, (column, column_area)) in board
        .columns
        .iter()
        .zip(column_areas(area, count))
        .enumerate()
    {
        let is_focused = selected_column == i;
        let view = ColumnView {
            is_focused,
            prev_focused: i > 0 && selected_column == i - 1,
            selected_idx: if is_focused { selected_card } else { None },
            dragging,
        };
        render_column(column, view, column_area, buf, ColumnPosition::of(i, count));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use quadro_protocol::seed::seeded_board;
    use quadro_protocol::{Action, ColumnId, SequentialIds, reduce};

    #[test]
    fn render_seeded_board() {
        let board = seeded_board(true);
        let area = Rect::new(0, 0, 90, 20);
        let mut buf = Buffer::empty(area);

        render_board(&board, 0, None, None, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("A Fazer (2)"));
        assert!(content.contains("Em progresso (1)"));
        assert!(content.contains("Concluídas (1)"));
        assert!(content.contains("Card 4"));
    }

    #[test]
    fn render_board_with_user_column() {
        let board = seeded_board(false);
        let mut ids = SequentialIds::after(&board);
        let board = reduce(
            &board,
            &Action::AddColumn {
                title: "Bloqueado".into(),
            },
            &mut ids,
        )
        .unwrap();
        assert_eq!(board.columns[3].id, ColumnId(4));

        let area = Rect::new(0, 0, 100, 12);
        let mut buf = Buffer::empty(area);
        render_board(&board, 3, None, None, area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Bloqueado (0)"));
        assert!(content.contains("No cards"));
    }

    #[test]
    fn render_empty_board() {
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);

        render_board(&Board::default(), 0, None, None, area, &mut buf);

        assert_eq!(buffer_to_string(&buf).trim(), "");
    }

    #[test]
    fn render_board_narrow_terminal() {
        let board = seeded_board(true);
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);

        render_board(&board, 2, Some(0), None, area, &mut buf);
    }
}
