//! Kanban board types and structures.
//!
//! This module defines the columns and the board that owns them, along with
//! the in-place operations the reducer builds on. Every operation validates
//! its inputs before touching anything, so a failed call leaves the board as
//! it was.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::card::Card;
use crate::error::{BoardError, Result};
use crate::ids::{CardId, ColumnId};
use crate::validation::{validate_card_title, validate_column_title};

/// Where a column came from.
///
/// Seeded columns exist from startup and are never offered for deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColumnOrigin {
    /// One of the columns present when the board starts.
    Seeded,
    /// Added by the user.
    #[default]
    UserCreated,
}

/// A single column on the board.
///
/// # Examples
///
/// ```
/// use quadro_protocol::{Column, ColumnId};
///
/// let column = Column::new(ColumnId(7), "Blocked");
/// assert!(column.is_empty());
/// assert!(column.is_deletable());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Unique identifier for this column.
    pub id: ColumnId,
    /// Display title, unique across the board.
    pub title: String,
    /// Cards in display order.
    pub cards: Vec<Card>,
    /// Whether this column was seeded or user-created.
    #[serde(default)]
    pub origin: ColumnOrigin,
}

impl Column {
    /// Creates an empty user-created column.
    #[must_use]
    pub fn new(id: ColumnId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            cards: Vec::new(),
            origin: ColumnOrigin::UserCreated,
        }
    }

    /// Creates an empty seeded column.
    #[must_use]
    pub fn seeded(id: ColumnId, title: impl Into<String>) -> Self {
        Self {
            origin: ColumnOrigin::Seeded,
            ..Self::new(id, title)
        }
    }

    /// Returns the number of cards in this column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns `true` if the column has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns `true` if the UI should offer to delete this column.
    #[must_use]
    pub fn is_deletable(&self) -> bool {
        self.origin == ColumnOrigin::UserCreated
    }

    /// Returns the position of a card in this column.
    #[must_use]
    pub fn position_of(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|card| card.id == id)
    }

    /// Returns a reference to a card by id, if it is in this column.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Returns `true` if the card is in this column.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.position_of(id).is_some()
    }

    /// Removes and returns a card by id, if found.
    pub fn remove_card(&mut self, id: CardId) -> Option<Card> {
        let pos = self.position_of(id)?;
        Some(self.cards.remove(pos))
    }
}

/// The board: an ordered list of columns.
///
/// # Examples
///
/// ```
/// use quadro_protocol::{Board, Card, CardId, ColumnId};
///
/// let mut board = Board::default();
/// board.add_column(ColumnId(1), "Todo").unwrap();
/// board.add_card("Todo", Card::new(CardId(1), "Buy milk", "")).unwrap();
///
/// assert_eq!(board.total_cards(), 1);
/// assert!(board.find_card(CardId(1)).is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Columns in display order.
    pub columns: Vec<Column>,
}

impl Board {
    /// Creates a board from a list of columns.
    #[must_use]
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Returns a column by id.
    #[must_use]
    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        self.columns.iter().find(|col| col.id == id)
    }

    /// Returns a column by its exact title.
    #[must_use]
    pub fn column_by_title(&self, title: &str) -> Option<&Column> {
        self.columns.iter().find(|col| col.title == title)
    }

    /// Returns the column that holds a card, along with the card.
    #[must_use]
    pub fn find_card(&self, id: CardId) -> Option<(&Column, &Card)> {
        self.columns
            .iter()
            .find_map(|col| col.card(id).map(|card| (col, card)))
    }

    /// Iterates over every card on the board, column by column.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.columns.iter().flat_map(|col| col.cards.iter())
    }

    /// Returns the total number of cards across all columns.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    fn column_mut(&mut self, id: ColumnId) -> Result<&mut Column> {
        self.columns
            .iter_mut()
            .find(|col| col.id == id)
            .ok_or(BoardError::ColumnNotFound(id))
    }

    fn column_index_by_title(&self, title: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|col| col.title == title)
            .ok_or_else(|| BoardError::ColumnTitleNotFound(title.to_string()))
    }

    /// Appends a new, empty, user-created column.
    ///
    /// # Errors
    ///
    /// Fails if the title is invalid or already taken by another column.
    pub fn add_column(&mut self, id: ColumnId, title: &str) -> Result<()> {
        validate_column_title(title).map_err(BoardError::InvalidColumnTitle)?;
        if self.column_by_title(title).is_some() {
            return Err(BoardError::DuplicateColumn(title.to_string()));
        }
        self.columns.push(Column::new(id, title));
        Ok(())
    }

    /// Appends a card to the column with the given title.
    ///
    /// # Errors
    ///
    /// Fails if the card title is invalid or the column does not exist.
    pub fn add_card(&mut self, column_title: &str, card: Card) -> Result<()> {
        validate_card_title(&card.title).map_err(BoardError::InvalidCardTitle)?;
        let idx = self.column_index_by_title(column_title)?;
        self.columns[idx].cards.push(card);
        Ok(())
    }

    /// Removes a card from a specific column.
    ///
    /// # Errors
    ///
    /// Fails if the column does not exist or does not hold the card.
    pub fn delete_card(&mut self, column_id: ColumnId, card_id: CardId) -> Result<Card> {
        self.column_mut(column_id)?
            .remove_card(card_id)
            .ok_or(BoardError::CardNotFound(card_id))
    }

    /// Replaces the title and description of a card, wherever it is.
    ///
    /// The lookup scans every column and updates every card carrying the id.
    /// Ids are unique by construction, so more than one match means the board
    /// is already inconsistent; that case is logged and left as is.
    ///
    /// # Errors
    ///
    /// Fails if the new title is invalid or no card has the id.
    pub fn edit_card(&mut self, card_id: CardId, title: &str, description: &str) -> Result<()> {
        validate_card_title(title).map_err(BoardError::InvalidCardTitle)?;
        let mut matches = 0usize;
        for card in self.columns.iter_mut().flat_map(|col| col.cards.iter_mut()) {
            if card.id == card_id {
                card.title = title.to_string();
                card.description = description.to_string();
                matches += 1;
            }
        }
        match matches {
            0 => Err(BoardError::CardNotFound(card_id)),
            1 => Ok(()),
            n => {
                warn!(card = %card_id, matches = n, "card id appears in more than one place");
                Ok(())
            }
        }
    }

    /// Removes a column and every card in it.
    ///
    /// # Errors
    ///
    /// Fails if no column has the id.
    pub fn delete_column(&mut self, column_id: ColumnId) -> Result<Column> {
        let pos = self
            .columns
            .iter()
            .position(|col| col.id == column_id)
            .ok_or(BoardError::ColumnNotFound(column_id))?;
        Ok(self.columns.remove(pos))
    }

    /// Moves a card to `index` within its own column.
    ///
    /// An index past the end places the card last.
    ///
    /// # Errors
    ///
    /// Fails if the column does not exist or does not hold the card.
    pub fn move_card_to_position(
        &mut self,
        column_id: ColumnId,
        card_id: CardId,
        index: usize,
    ) -> Result<()> {
        let column = self.column_mut(column_id)?;
        let card = column
            .remove_card(card_id)
            .ok_or(BoardError::CardNotFound(card_id))?;
        let index = index.min(column.cards.len());
        column.cards.insert(index, card);
        Ok(())
    }

    /// Moves a card to the end of the column with the given title.
    ///
    /// # Errors
    ///
    /// Fails if the card or the target column does not exist, or if the card
    /// is already in the target column. The board is unchanged in every
    /// failure case.
    pub fn move_card_between_columns(&mut self, card_id: CardId, target_title: &str) -> Result<()> {
        let target = self.column_index_by_title(target_title)?;
        if self.columns[target].contains(card_id) {
            return Err(BoardError::CardAlreadyInColumn {
                card: card_id,
                column: target_title.to_string(),
            });
        }
        let card = self
            .columns
            .iter_mut()
            .find_map(|col| col.remove_card(card_id))
            .ok_or(BoardError::CardNotFound(card_id))?;
        self.columns[target].cards.push(card);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    fn board() -> Board {
        let mut todo = Column::seeded(ColumnId(1), "Todo");
        todo.cards.push(Card::new(CardId(1), "Card 1", ""));
        todo.cards.push(Card::new(CardId(2), "Card 2", ""));
        todo.cards.push(Card::new(CardId(3), "Card 3", ""));
        let mut doing = Column::seeded(ColumnId(2), "Doing");
        doing.cards.push(Card::new(CardId(4), "Card 4", ""));
        Board::new(vec![todo, doing])
    }

    fn titles(column: &Column) -> Vec<&str> {
        column.cards.iter().map(|c| c.title.as_str()).collect()
    }

    #[test]
    fn column_origin_controls_deletability() {
        assert!(!Column::seeded(ColumnId(1), "Todo").is_deletable());
        assert!(Column::new(ColumnId(9), "Extra").is_deletable());
    }

    #[test]
    fn add_column_appends_user_created_column() {
        let mut board = board();
        board.add_column(ColumnId(3), "Done").unwrap();

        let column = board.columns.last().unwrap();
        assert_eq!(column.title, "Done");
        assert_eq!(column.origin, ColumnOrigin::UserCreated);
        assert!(column.is_empty());
    }

    #[test]
    fn add_column_rejects_duplicate_title() {
        let mut board = board();
        let before = board.clone();

        let err = board.add_column(ColumnId(3), "Todo").unwrap_err();
        assert_eq!(err, BoardError::DuplicateColumn("Todo".into()));
        assert_eq!(board, before);
    }

    #[test]
    fn add_column_titles_are_case_sensitive() {
        let mut board = board();
        assert!(board.add_column(ColumnId(3), "todo").is_ok());
    }

    #[test]
    fn add_column_rejects_short_title() {
        let mut board = board();
        let err = board.add_column(ColumnId(3), "ab").unwrap_err();
        assert_eq!(
            err,
            BoardError::InvalidColumnTitle(ValidationError::TooShort { min: 3, actual: 2 })
        );
    }

    #[test]
    fn add_card_appends_to_named_column() {
        let mut board = board();
        board
            .add_card("Doing", Card::new(CardId(10), "New card", "details"))
            .unwrap();
        assert_eq!(titles(&board.columns[1]), ["Card 4", "New card"]);
    }

    #[test]
    fn add_card_to_missing_column_fails() {
        let mut board = board();
        let err = board
            .add_card("Nope", Card::new(CardId(10), "New card", ""))
            .unwrap_err();
        assert_eq!(err, BoardError::ColumnTitleNotFound("Nope".into()));
    }

    #[test]
    fn delete_card_is_column_scoped() {
        let mut board = board();
        // Card 4 lives in Doing, not Todo.
        let err = board.delete_card(ColumnId(1), CardId(4)).unwrap_err();
        assert_eq!(err, BoardError::CardNotFound(CardId(4)));

        let removed = board.delete_card(ColumnId(2), CardId(4)).unwrap();
        assert_eq!(removed.title, "Card 4");
        assert!(board.columns[1].is_empty());
    }

    #[test]
    fn edit_card_updates_across_columns() {
        let mut board = board();
        board.edit_card(CardId(4), "Renamed", "New desc").unwrap();

        let (column, card) = board.find_card(CardId(4)).unwrap();
        assert_eq!(column.title, "Doing");
        assert_eq!(card.title, "Renamed");
        assert_eq!(card.description, "New desc");
    }

    #[test]
    fn edit_card_with_duplicated_id_updates_every_copy() {
        let mut board = board();
        board.columns[1]
            .cards
            .push(Card::new(CardId(1), "Stray copy", ""));

        board.edit_card(CardId(1), "Both", "").unwrap();
        assert_eq!(board.cards().filter(|c| c.title == "Both").count(), 2);
    }

    #[test]
    fn edit_card_rejects_invalid_title_without_changes() {
        let mut board = board();
        let before = board.clone();
        assert!(board.edit_card(CardId(1), "no", "").is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn delete_column_removes_cards() {
        let mut board = board();
        let removed = board.delete_column(ColumnId(1)).unwrap();
        assert_eq!(removed.len(), 3);
        assert_eq!(board.total_cards(), 1);
        assert!(board.find_card(CardId(1)).is_none());
    }

    #[test]
    fn move_card_to_position_clamps_index() {
        let mut board = board();
        board
            .move_card_to_position(ColumnId(1), CardId(1), 99)
            .unwrap();
        assert_eq!(titles(&board.columns[0]), ["Card 2", "Card 3", "Card 1"]);
    }

    #[test]
    fn move_last_card_to_top_keeps_order_of_the_rest() {
        let mut board = board();
        board
            .add_card("Todo", Card::new(CardId(5), "Card 5", ""))
            .unwrap();

        board.move_card_to_position(ColumnId(1), CardId(5), 0).unwrap();

        assert_eq!(
            titles(&board.columns[0]),
            ["Card 5", "Card 1", "Card 2", "Card 3"]
        );
        assert_eq!(titles(&board.columns[1]), ["Card 4"]);
    }

    #[test]
    fn move_middle_card_to_top() {
        let mut board = board();
        board.move_card_to_position(ColumnId(1), CardId(2), 0).unwrap();
        assert_eq!(titles(&board.columns[0]), ["Card 2", "Card 1", "Card 3"]);
    }

    #[test]
    fn move_card_into_its_own_column_is_refused_unchanged() {
        let mut board = board();
        let before = board.clone();

        let err = board
            .move_card_between_columns(CardId(3), "Todo")
            .unwrap_err();

        assert_eq!(
            err,
            BoardError::CardAlreadyInColumn {
                card: CardId(3),
                column: "Todo".into(),
            }
        );
        assert_eq!(board, before);
    }

    #[test]
    fn move_card_between_columns_appends_at_end() {
        let mut board = board();
        board.move_card_between_columns(CardId(2), "Doing").unwrap();
        assert_eq!(titles(&board.columns[0]), ["Card 1", "Card 3"]);
        assert_eq!(titles(&board.columns[1]), ["Card 4", "Card 2"]);
    }

    #[test]
    fn move_card_to_missing_column_keeps_card() {
        let mut board = board();
        let before = board.clone();
        assert!(board.move_card_between_columns(CardId(2), "Nope").is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn move_missing_card_fails_cleanly() {
        let mut board = board();
        let err = board
            .move_card_between_columns(CardId(99), "Doing")
            .unwrap_err();
        assert_eq!(err, BoardError::CardNotFound(CardId(99)));
    }
}
