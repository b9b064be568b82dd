//! The board every session starts from.
//!
//! Three fixed columns, optionally holding four sample cards. Column ids run
//! from 1 to 3 and card ids from 1 to 4, so [`SequentialIds::after`] picks up
//! right where the seed leaves off.
//!
//! # Examples
//!
//! ```
//! use quadro_protocol::seed::seeded_board;
//!
//! let board = seeded_board(true);
//! assert_eq!(board.total_cards(), 4);
//! assert_eq!(seeded_board(false).total_cards(), 0);
//! ```
//!
//! [`SequentialIds::after`]: crate::ids::SequentialIds::after

use crate::board::{Board, Column};
use crate::card::Card;
use crate::ids::{CardId, ColumnId};

/// Title of the first seeded column.
pub const TODO: &str = "A Fazer";
/// Title of the second seeded column.
pub const IN_PROGRESS: &str = "Em progresso";
/// Title of the third seeded column.
pub const DONE: &str = "Concluídas";

/// Builds a seeded column and its sample cards.
struct ColumnBuilder {
    column: Column,
}

impl ColumnBuilder {
    fn new(id: u64, title: &str) -> Self {
        Self {
            column: Column::seeded(ColumnId(id), title),
        }
    }

    fn sample_card(mut self, n: u64) -> Self {
        self.column.cards.push(Card::new(
            CardId(n),
            format!("Card {n}"),
            format!("Descrição do Card {n}"),
        ));
        self
    }

    fn build(self) -> Column {
        self.column
    }
}

/// Returns the starting board.
///
/// With `sample_cards` off the three columns are created empty.
#[must_use]
pub fn seeded_board(sample_cards: bool) -> Board {
    let mut todo = ColumnBuilder::new(1, TODO);
    let mut in_progress = ColumnBuilder::new(2, IN_PROGRESS);
    let mut done = ColumnBuilder::new(3, DONE);

    if sample_cards {
        todo = todo.sample_card(1).sample_card(2);
        in_progress = in_progress.sample_card(3);
        done = done.sample_card(4);
    }

    Board::new(vec![todo.build(), in_progress.build(), done.build()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::ColumnOrigin;

    #[test]
    fn seeded_columns_are_in_order() {
        let board = seeded_board(true);
        let titles: Vec<&str> = board.columns.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, [TODO, IN_PROGRESS, DONE]);
    }

    #[test]
    fn seeded_columns_are_not_deletable() {
        for column in &seeded_board(true).columns {
            assert_eq!(column.origin, ColumnOrigin::Seeded);
            assert!(!column.is_deletable());
        }
    }

    #[test]
    fn sample_cards_are_distributed() {
        let board = seeded_board(true);
        assert_eq!(board.columns[0].len(), 2);
        assert_eq!(board.columns[1].len(), 1);
        assert_eq!(board.columns[2].len(), 1);

        let (column, card) = board.find_card(CardId(3)).unwrap();
        assert_eq!(column.title, IN_PROGRESS);
        assert_eq!(card.title, "Card 3");
        assert_eq!(card.description, "Descrição do Card 3");
    }

    #[test]
    fn empty_seed_keeps_columns() {
        let board = seeded_board(false);
        assert_eq!(board.columns.len(), 3);
        assert!(board.columns.iter().all(Column::is_empty));
    }
}
