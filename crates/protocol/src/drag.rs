//! Drag-and-drop payloads and the typed move command.
//!
//! A drag carries the dragged card's id as plain text, the same way a
//! browser `text/plain` data transfer would. On drop, the payload and the
//! drop target are resolved against the board into a [`MoveCard`], which
//! converts into [`Action::MoveCardBetweenColumns`].

use crate::action::Action;
use crate::board::Board;
use crate::error::{BoardError, Result};
use crate::ids::{CardId, ColumnId};

/// Text payload attached to a drag.
///
/// # Examples
///
/// ```
/// use quadro_protocol::{CardId, DragPayload};
///
/// let payload = DragPayload::for_card(CardId(2));
/// assert_eq!(payload.as_str(), "2");
/// assert_eq!(payload.card_id().unwrap(), CardId(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload(String);

impl DragPayload {
    /// Builds the payload for dragging a card.
    #[must_use]
    pub fn for_card(id: CardId) -> Self {
        Self(id.to_string())
    }

    /// Wraps raw text received from a drop event.
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Returns the raw text of the payload.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decodes the card id carried by the payload.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidDragPayload`] if the text is not a card id.
    pub fn card_id(&self) -> Result<CardId> {
        self.0
            .parse()
            .map_err(|_| BoardError::InvalidDragPayload(self.0.clone()))
    }
}

/// A card move from one column to another, resolved against a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveCard {
    /// The card being moved.
    pub card_id: CardId,
    /// Column the card currently sits in.
    pub source: ColumnId,
    /// Column the card was dropped on.
    pub target: ColumnId,
    /// Title of the target column.
    pub target_title: String,
}

impl MoveCard {
    /// Resolves a drop of `payload` onto column `target`.
    ///
    /// # Errors
    ///
    /// Fails if the payload is not a card id, or if the card or the target
    /// column is not on the board.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadro_protocol::{Action, CardId, ColumnId, DragPayload, MoveCard};
    /// use quadro_protocol::seed::seeded_board;
    ///
    /// let board = seeded_board(true);
    /// let payload = DragPayload::for_card(CardId(2));
    /// let command = MoveCard::resolve(&board, &payload, ColumnId(2)).unwrap();
    ///
    /// assert_eq!(command.source, ColumnId(1));
    /// assert_eq!(
    ///     Action::from(command),
    ///     Action::MoveCardBetweenColumns { card_id: CardId(2), target: "Em progresso".into() },
    /// );
    /// ```
    pub fn resolve(board: &Board, payload: &DragPayload, target: ColumnId) -> Result<Self> {
        let card_id = payload.card_id()?;
        let (source, _) = board
            .find_card(card_id)
            .ok_or(BoardError::CardNotFound(card_id))?;
        let target_column = board
            .column(target)
            .ok_or(BoardError::ColumnNotFound(target))?;
        Ok(Self {
            card_id,
            source: source.id,
            target,
            target_title: target_column.title.clone(),
        })
    }

    /// Returns `true` if the card was dropped on the column it came from.
    #[must_use]
    pub fn is_same_column(&self) -> bool {
        self.source == self.target
    }
}

impl From<MoveCard> for Action {
    fn from(command: MoveCard) -> Self {
        Self::MoveCardBetweenColumns {
            card_id: command.card_id,
            target: command.target_title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seeded_board;

    #[test]
    fn garbage_payload_is_rejected() {
        let payload = DragPayload::from_text("card-two");
        assert_eq!(
            payload.card_id(),
            Err(BoardError::InvalidDragPayload("card-two".into()))
        );
    }

    #[test]
    fn resolve_unknown_card_fails() {
        let board = seeded_board(true);
        let payload = DragPayload::for_card(CardId(42));
        assert_eq!(
            MoveCard::resolve(&board, &payload, ColumnId(1)),
            Err(BoardError::CardNotFound(CardId(42)))
        );
    }

    #[test]
    fn resolve_unknown_target_fails() {
        let board = seeded_board(true);
        let payload = DragPayload::for_card(CardId(1));
        assert_eq!(
            MoveCard::resolve(&board, &payload, ColumnId(9)),
            Err(BoardError::ColumnNotFound(ColumnId(9)))
        );
    }

    #[test]
    fn drop_on_own_column_is_detected() {
        let board = seeded_board(true);
        let payload = DragPayload::from_text("3");
        let command = MoveCard::resolve(&board, &payload, ColumnId(2)).unwrap();
        assert!(command.is_same_column());
        assert_eq!(command.target_title, "Em progresso");
    }
}
