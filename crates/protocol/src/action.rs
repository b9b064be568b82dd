//! Board actions and the reducer that applies them.
//!
//! Every change to the board is expressed as an [`Action`]. [`reduce`] turns
//! a board and an action into the next board without touching its input, so
//! transitions can be tested without any UI.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::card::Card;
use crate::error::{BoardError, Result};
use crate::ids::{CardId, ColumnId, IdGenerator};
use crate::validation::{validate_card_title, validate_column_title};

/// A request to change the board.
///
/// # Examples
///
/// ```
/// use quadro_protocol::{Action, CardId};
///
/// let action = Action::MoveCardBetweenColumns {
///     card_id: CardId(2),
///     target: "Em progresso".into(),
/// };
/// assert_eq!(action.name(), "move_card_between_columns");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Append a new, empty column.
    AddColumn {
        /// Title of the new column.
        title: String,
    },
    /// Append a new card to a column, addressed by title.
    AddCard {
        /// Title of the target column.
        column: String,
        /// Title of the new card.
        title: String,
        /// Optional description of the new card.
        description: Option<String>,
    },
    /// Remove a card from a column.
    DeleteCard {
        /// Column holding the card.
        column_id: ColumnId,
        /// Card to remove.
        card_id: CardId,
    },
    /// Replace a card's title and description, wherever it is.
    EditCard {
        /// Card to edit.
        card_id: CardId,
        /// New title.
        title: String,
        /// New description (empty for none).
        description: String,
    },
    /// Remove a column and all its cards.
    DeleteColumn {
        /// Column to remove.
        column_id: ColumnId,
    },
    /// Reinsert a card at `index` within its own column.
    MoveCardToPosition {
        /// Column holding the card.
        column_id: ColumnId,
        /// Card to move.
        card_id: CardId,
        /// Destination index (0 is the top).
        index: usize,
    },
    /// Move a card to the end of another column, addressed by title.
    MoveCardBetweenColumns {
        /// Card to move.
        card_id: CardId,
        /// Title of the target column.
        target: String,
    },
}

impl Action {
    /// Builds the "move to top" action for a card.
    #[must_use]
    pub const fn move_to_top(column_id: ColumnId, card_id: CardId) -> Self {
        Self::MoveCardToPosition {
            column_id,
            card_id,
            index: 0,
        }
    }

    /// Returns a short, stable name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddColumn { .. } => "add_column",
            Self::AddCard { .. } => "add_card",
            Self::DeleteCard { .. } => "delete_card",
            Self::EditCard { .. } => "edit_card",
            Self::DeleteColumn { .. } => "delete_column",
            Self::MoveCardToPosition { .. } => "move_card_to_position",
            Self::MoveCardBetweenColumns { .. } => "move_card_between_columns",
        }
    }
}

/// Applies `action` to `board` and returns the resulting board.
///
/// `board` itself is never modified. Ids for new cards and columns come from
/// `ids`, which is only consulted by `AddCard` and `AddColumn`.
///
/// # Errors
///
/// Returns the [`BoardError`] raised by the underlying board operation. Use
/// [`BoardError::is_user_facing`] to tell rejected input from stale
/// references.
///
/// # Examples
///
/// ```
/// use quadro_protocol::{reduce, Action, SequentialIds};
/// use quadro_protocol::seed::seeded_board;
///
/// let board = seeded_board(true);
/// let mut ids = SequentialIds::after(&board);
///
/// let next = reduce(&board, &Action::AddColumn { title: "Bloqueado".into() }, &mut ids).unwrap();
/// assert_eq!(next.columns.len(), 4);
/// assert_eq!(board.columns.len(), 3);
/// ```
pub fn reduce(board: &Board, action: &Action, ids: &mut dyn IdGenerator) -> Result<Board> {
    let mut next = board.clone();
    match action {
        Action::AddColumn { title } => {
            // Rejected input must not consume an id.
            validate_column_title(title).map_err(BoardError::InvalidColumnTitle)?;
            if next.column_by_title(title).is_some() {
                return Err(BoardError::DuplicateColumn(title.clone()));
            }
            next.add_column(ids.next_column_id(), title)?;
        }
        Action::AddCard {
            column,
            title,
            description,
        } => {
            validate_card_title(title).map_err(BoardError::InvalidCardTitle)?;
            if next.column_by_title(column).is_none() {
                return Err(BoardError::ColumnTitleNotFound(column.clone()));
            }
            let card = Card::new(
                ids.next_card_id(),
                title.as_str(),
                description.clone().unwrap_or_default(),
            );
            next.add_card(column, card)?;
        }
        Action::DeleteCard { column_id, card_id } => {
            next.delete_card(*column_id, *card_id)?;
        }
        Action::EditCard {
            card_id,
            title,
            description,
        } => {
            next.edit_card(*card_id, title, description)?;
        }
        Action::DeleteColumn { column_id } => {
            next.delete_column(*column_id)?;
        }
        Action::MoveCardToPosition {
            column_id,
            card_id,
            index,
        } => {
            next.move_card_to_position(*column_id, *card_id, *index)?;
        }
        Action::MoveCardBetweenColumns { card_id, target } => {
            next.move_card_between_columns(*card_id, target)?;
        }
    }
    Ok(next)
}
