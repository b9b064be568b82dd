//! Error types for the quadro-protocol crate.
//!
//! This module defines the failures a board transition can produce. Some are
//! meant for the user (bad input, duplicate column names); the rest describe
//! requests that referred to something no longer on the board and are only
//! logged.

use thiserror::Error;

use crate::ids::{CardId, ColumnId};

/// A title failed its length rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The title was empty or whitespace only.
    #[error("title is required")]
    Empty,

    /// The title has fewer characters than allowed.
    #[error("title must be at least {min} characters (got {actual})")]
    TooShort {
        /// Minimum allowed length.
        min: usize,
        /// Length of the rejected title.
        actual: usize,
    },

    /// The title has more characters than allowed.
    #[error("title must be at most {max} characters (got {actual})")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
        /// Length of the rejected title.
        actual: usize,
    },
}

/// Errors that can occur when applying an action to the board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// A column with this title already exists.
    #[error("a column named \"{0}\" already exists")]
    DuplicateColumn(String),

    /// The column title failed validation.
    #[error("invalid column title: {0}")]
    InvalidColumnTitle(#[source] ValidationError),

    /// The card title failed validation.
    #[error("invalid card title: {0}")]
    InvalidCardTitle(#[source] ValidationError),

    /// No column has this id.
    #[error("column not found: {0}")]
    ColumnNotFound(ColumnId),

    /// No column has this title.
    #[error("column not found: \"{0}\"")]
    ColumnTitleNotFound(String),

    /// The card is not on the board (or not in the given column).
    #[error("card not found: {0}")]
    CardNotFound(CardId),

    /// The card already sits in the column it was dropped on.
    #[error("card {card} is already in column \"{column}\"")]
    CardAlreadyInColumn {
        /// The card that was dropped.
        card: CardId,
        /// Title of the target column.
        column: String,
    },

    /// A drag payload did not carry a card id.
    #[error("invalid drag payload: {0:?}")]
    InvalidDragPayload(String),
}

impl BoardError {
    /// Returns `true` if this error should be shown to the user.
    ///
    /// Everything else is a stale reference and is only logged.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadro_protocol::{BoardError, CardId};
    ///
    /// assert!(BoardError::DuplicateColumn("Done".into()).is_user_facing());
    /// assert!(!BoardError::CardNotFound(CardId(9)).is_user_facing());
    /// ```
    #[must_use]
    pub const fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::DuplicateColumn(_) | Self::InvalidColumnTitle(_) | Self::InvalidCardTitle(_)
        )
    }
}

/// A specialized Result type for board operations.
pub type Result<T> = std::result::Result<T, BoardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = BoardError::DuplicateColumn("A Fazer".to_string());
        assert_eq!(err.to_string(), "a column named \"A Fazer\" already exists");

        let err = BoardError::InvalidCardTitle(ValidationError::TooShort { min: 3, actual: 2 });
        assert_eq!(
            err.to_string(),
            "invalid card title: title must be at least 3 characters (got 2)"
        );

        let err = BoardError::CardNotFound(CardId(4));
        assert_eq!(err.to_string(), "card not found: 4");
    }

    #[test]
    fn stale_references_are_not_user_facing() {
        assert!(!BoardError::ColumnNotFound(ColumnId(1)).is_user_facing());
        assert!(!BoardError::ColumnTitleNotFound("x".into()).is_user_facing());
        assert!(
            !BoardError::CardAlreadyInColumn {
                card: CardId(1),
                column: "A Fazer".into()
            }
            .is_user_facing()
        );
        assert!(!BoardError::InvalidDragPayload("abc".into()).is_user_facing());
        assert!(BoardError::InvalidColumnTitle(ValidationError::Empty).is_user_facing());
    }
}
