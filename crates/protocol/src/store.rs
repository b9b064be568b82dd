//! The board store.
//!
//! [`Store`] is the single owner of the board. It applies actions through
//! [`reduce`] and sorts failures into the ones the user should see and the
//! ones that are only worth a log line.

use tracing::{debug, info};

use crate::action::{Action, reduce};
use crate::board::Board;
use crate::error::BoardError;
use crate::ids::{IdGenerator, SequentialIds};
use crate::seed::seeded_board;

/// Result of dispatching an action.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Dispatch {
    /// The board changed.
    Applied,
    /// The action referred to something that is not there; the board is
    /// unchanged and nothing needs to be shown.
    Ignored(BoardError),
    /// The action was refused; the error should be shown to the user.
    Rejected(BoardError),
}

impl Dispatch {
    /// Returns `true` if the board changed.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }

    /// Returns the user-facing error, if the action was rejected.
    #[must_use]
    pub const fn rejection(&self) -> Option<&BoardError> {
        match self {
            Self::Rejected(err) => Some(err),
            _ => None,
        }
    }
}

/// Owns the board and the id generator.
///
/// # Examples
///
/// ```
/// use quadro_protocol::{Action, Store};
///
/// let mut store = Store::seeded();
/// let outcome = store.dispatch(Action::AddColumn { title: "Bloqueado".into() });
/// assert!(outcome.is_applied());
///
/// // Same title again is refused.
/// let outcome = store.dispatch(Action::AddColumn { title: "Bloqueado".into() });
/// assert!(outcome.rejection().is_some());
/// ```
#[derive(Debug)]
pub struct Store {
    board: Board,
    ids: Box<dyn IdGenerator + Send>,
}

impl Store {
    /// Creates a store around an existing board and id generator.
    #[must_use]
    pub fn new(board: Board, ids: Box<dyn IdGenerator + Send>) -> Self {
        Self { board, ids }
    }

    /// Creates a store holding the seeded board, with sequential ids.
    #[must_use]
    pub fn seeded() -> Self {
        let board = seeded_board(true);
        let ids = SequentialIds::after(&board);
        Self::new(board, Box::new(ids))
    }

    /// Returns the current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Applies an action and replaces the board on success.
    pub fn dispatch(&mut self, action: Action) -> Dispatch {
        match reduce(&self.board, &action, self.ids.as_mut()) {
            Ok(next) => {
                self.board = next;
                debug!(action = action.name(), "applied");
                Dispatch::Applied
            }
            Err(err) if err.is_user_facing() => {
                info!(action = action.name(), error = %err, "rejected");
                Dispatch::Rejected(err)
            }
            Err(err) => {
                debug!(action = action.name(), error = %err, "ignored");
                Dispatch::Ignored(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{CardId, ColumnId};

    #[test]
    fn seeded_store_has_three_columns() {
        let store = Store::seeded();
        assert_eq!(store.board().columns.len(), 3);
        assert_eq!(store.board().total_cards(), 4);
    }

    #[test]
    fn rejected_action_keeps_board() {
        let mut store = Store::seeded();
        let before = store.board().clone();

        let outcome = store.dispatch(Action::AddColumn {
            title: "A Fazer".into(),
        });

        assert_eq!(
            outcome,
            Dispatch::Rejected(BoardError::DuplicateColumn("A Fazer".into()))
        );
        assert_eq!(store.board(), &before);
    }

    #[test]
    fn stale_reference_is_ignored() {
        let mut store = Store::seeded();
        let before = store.board().clone();

        let outcome = store.dispatch(Action::DeleteCard {
            column_id: ColumnId(1),
            card_id: CardId(99),
        });

        assert_eq!(outcome, Dispatch::Ignored(BoardError::CardNotFound(CardId(99))));
        assert!(outcome.rejection().is_none());
        assert_eq!(store.board(), &before);
    }

    #[test]
    fn move_to_top_reorders_a_long_column() {
        let mut store = Store::seeded();
        for title in ["Card x1", "Card x2"] {
            let outcome = store.dispatch(Action::AddCard {
                column: "A Fazer".into(),
                title: title.into(),
                description: None,
            });
            assert!(outcome.is_applied());
        }

        let outcome = store.dispatch(Action::move_to_top(ColumnId(1), CardId(6)));

        assert!(outcome.is_applied());
        let column = store.board().column(ColumnId(1)).unwrap();
        let titles: Vec<&str> = column.cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["Card x2", "Card 1", "Card 2", "Card x1"]);
    }

    #[test]
    fn move_into_current_column_is_ignored() {
        let mut store = Store::seeded();
        let before = store.board().clone();

        let outcome = store.dispatch(Action::MoveCardBetweenColumns {
            card_id: CardId(1),
            target: "A Fazer".into(),
        });

        assert_eq!(
            outcome,
            Dispatch::Ignored(BoardError::CardAlreadyInColumn {
                card: CardId(1),
                column: "A Fazer".into(),
            })
        );
        assert_eq!(store.board(), &before);

        // Asking again changes nothing either.
        let again = store.dispatch(Action::MoveCardBetweenColumns {
            card_id: CardId(1),
            target: "A Fazer".into(),
        });
        assert!(!again.is_applied());
        assert_eq!(store.board(), &before);
    }

    #[test]
    fn new_cards_get_fresh_ids() {
        let mut store = Store::seeded();
        for title in ["Primeiro", "Segundo"] {
            let outcome = store.dispatch(Action::AddCard {
                column: "Concluídas".into(),
                title: title.into(),
                description: None,
            });
            assert!(outcome.is_applied());
        }

        let column = store.board().column_by_title("Concluídas").unwrap();
        let ids: Vec<CardId> = column.cards.iter().map(|c| c.id).collect();
        assert_eq!(ids, [CardId(4), CardId(5), CardId(6)]);
    }
}
