//! Card and column identifiers, and the generators that mint them.
//!
//! Identifiers are plain `u64` newtypes printed as decimal text. Card ids
//! also parse back from text, which is the format carried by a drag payload.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::board::Board;

/// Unique identifier for a card.
///
/// # Examples
///
/// ```
/// use quadro_protocol::CardId;
///
/// let id: CardId = "42".parse().unwrap();
/// assert_eq!(id, CardId(42));
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub u64);

/// Unique identifier for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(pub u64);

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CardId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Source of fresh card and column identifiers.
///
/// The store owns one generator and asks it for an id every time an
/// `AddCard` or `AddColumn` action is applied. Implementations must never
/// hand out the same id twice.
pub trait IdGenerator: fmt::Debug {
    /// Returns a card id that has not been handed out before.
    fn next_card_id(&mut self) -> CardId;

    /// Returns a column id that has not been handed out before.
    fn next_column_id(&mut self) -> ColumnId;
}

/// Monotonic counters, one per id kind.
///
/// # Examples
///
/// ```
/// use quadro_protocol::{CardId, IdGenerator, SequentialIds};
///
/// let mut ids = SequentialIds::starting_at(10, 1);
/// assert_eq!(ids.next_card_id(), CardId(10));
/// assert_eq!(ids.next_card_id(), CardId(11));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequentialIds {
    next_card: u64,
    next_column: u64,
}

impl SequentialIds {
    /// Creates counters that start at the given values.
    #[must_use]
    pub const fn starting_at(next_card: u64, next_column: u64) -> Self {
        Self {
            next_card,
            next_column,
        }
    }

    /// Creates counters that continue after the highest ids on `board`.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadro_protocol::{CardId, ColumnId, IdGenerator, SequentialIds};
    /// use quadro_protocol::seed::seeded_board;
    ///
    /// let board = seeded_board(true);
    /// let mut ids = SequentialIds::after(&board);
    /// assert_eq!(ids.next_card_id(), CardId(5));
    /// assert_eq!(ids.next_column_id(), ColumnId(4));
    /// ```
    #[must_use]
    pub fn after(board: &Board) -> Self {
        let max_card = board.cards().map(|card| card.id.0).max().unwrap_or(0);
        let max_column = board.columns.iter().map(|col| col.id.0).max().unwrap_or(0);
        Self::starting_at(max_card + 1, max_column + 1)
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(1, 1)
    }
}

impl IdGenerator for SequentialIds {
    fn next_card_id(&mut self) -> CardId {
        let id = CardId(self.next_card);
        self.next_card += 1;
        id
    }

    fn next_column_id(&mut self) -> ColumnId {
        let id = ColumnId(self.next_column);
        self.next_column += 1;
        id
    }
}

/// Wall-clock ids in milliseconds since the Unix epoch.
///
/// Two ids requested within the same millisecond (or after the clock went
/// backwards) are bumped past the previous one, so the sequence is strictly
/// increasing across both id kinds.
#[derive(Debug, Clone, Default)]
pub struct ClockIds {
    last: u64,
}

impl ClockIds {
    /// Creates a generator whose ids are always greater than `floor`.
    ///
    /// Use the highest id already on the board as the floor.
    #[must_use]
    pub const fn above(floor: u64) -> Self {
        Self { last: floor }
    }

    fn next_raw(&mut self) -> u64 {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        self.last = now.max(self.last + 1);
        self.last
    }
}

impl IdGenerator for ClockIds {
    fn next_card_id(&mut self) -> CardId {
        CardId(self.next_raw())
    }

    fn next_column_id(&mut self) -> ColumnId {
        ColumnId(self.next_raw())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_id_parses_with_surrounding_whitespace() {
        assert_eq!(" 7\n".parse::<CardId>().unwrap(), CardId(7));
        assert!("seven".parse::<CardId>().is_err());
        assert!("-1".parse::<CardId>().is_err());
    }

    #[test]
    fn ids_serialize_as_bare_numbers() {
        let json = serde_json::to_string(&CardId(3)).expect("serialize");
        assert_eq!(json, "3");
        let parsed: ColumnId = serde_json::from_str("12").expect("deserialize");
        assert_eq!(parsed, ColumnId(12));
    }

    #[test]
    fn sequential_ids_count_independently() {
        let mut ids = SequentialIds::default();
        assert_eq!(ids.next_card_id(), CardId(1));
        assert_eq!(ids.next_column_id(), ColumnId(1));
        assert_eq!(ids.next_card_id(), CardId(2));
        assert_eq!(ids.next_column_id(), ColumnId(2));
    }

    #[test]
    fn sequential_ids_after_empty_board_start_at_one() {
        let mut ids = SequentialIds::after(&Board::default());
        assert_eq!(ids.next_card_id(), CardId(1));
        assert_eq!(ids.next_column_id(), ColumnId(1));
    }

    #[test]
    fn clock_ids_are_strictly_increasing() {
        let mut ids = ClockIds::default();
        let mut previous = 0;
        for _ in 0..1000 {
            let id = ids.next_card_id().0;
            assert!(id > previous);
            previous = id;
        }
    }

    #[test]
    fn clock_ids_respect_floor() {
        let floor = u64::MAX / 2;
        let mut ids = ClockIds::above(floor);
        assert_eq!(ids.next_column_id(), ColumnId(floor + 1));
    }
}
