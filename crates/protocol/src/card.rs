//! The card type.

use serde::{Deserialize, Serialize};

use crate::ids::CardId;

/// A unit of work on the board.
///
/// A card always lives in exactly one column. An empty `description` means
/// the card has none.
///
/// # Examples
///
/// ```
/// use quadro_protocol::{Card, CardId};
///
/// let card = Card::new(CardId(1), "Write release notes", "");
/// assert_eq!(card.title, "Write release notes");
/// assert!(!card.has_description());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier for this card.
    pub id: CardId,
    /// Short summary of the card.
    pub title: String,
    /// Free-form details, possibly empty.
    #[serde(default)]
    pub description: String,
}

impl Card {
    /// Creates a card with the given id, title and description.
    #[must_use]
    pub fn new(id: CardId, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
        }
    }

    /// Returns `true` if the card has a non-blank description.
    #[must_use]
    pub fn has_description(&self) -> bool {
        !self.description.trim().is_empty()
    }
}
