//! Shared protocol types for the quadro application.
//!
//! This crate defines the board model and every transition on it, with no
//! terminal code involved.
//!
//! # Overview
//!
//! - [`ids`]: Card and column identifiers and the generators that mint them
//! - [`card`] and [`board`]: The data model
//! - [`validation`]: Title length rules
//! - [`action`]: Board actions and the pure [`reduce`] function
//! - [`store`]: The single owner of the board
//! - [`drag`]: Drag payloads and the typed move command
//! - [`seed`]: The starting board
//! - [`message`]: TUI event messages
//! - [`error`]: Error types for board operations
//!
//! # Examples
//!
//! ```
//! use quadro_protocol::{Action, CardId, Store};
//!
//! let mut store = Store::seeded();
//!
//! let outcome = store.dispatch(Action::MoveCardBetweenColumns {
//!     card_id: CardId(2),
//!     target: "Em progresso".into(),
//! });
//! assert!(outcome.is_applied());
//!
//! let (column, _) = store.board().find_card(CardId(2)).unwrap();
//! assert_eq!(column.title, "Em progresso");
//! ```

pub mod action;
pub mod board;
pub mod card;
pub mod drag;
pub mod error;
pub mod ids;
pub mod message;
pub mod seed;
pub mod store;
pub mod validation;

// Re-export primary types at crate root for convenience
pub use action::{Action, reduce};
pub use board::{Board, Column, ColumnOrigin};
pub use card::Card;
pub use drag::{DragPayload, MoveCard};
pub use error::{BoardError, Result, ValidationError};
pub use ids::{CardId, ClockIds, ColumnId, IdGenerator, SequentialIds};
pub use message::Message;
pub use store::{Dispatch, Store};
pub use validation::{
    CARD_TITLE_MAX, CARD_TITLE_MIN, COLUMN_TITLE_MAX, COLUMN_TITLE_MIN, validate_card_title,
    validate_column_title,
};

#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use super::*;

    fn any_column() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(seed::TODO.to_string()),
            Just(seed::IN_PROGRESS.to_string()),
            Just(seed::DONE.to_string()),
            "[A-Za-z]{3,8}",
        ]
    }

    fn any_action() -> impl Strategy<Value = Action> {
        let title = "[A-Za-z ]{0,40}";
        prop_oneof![
            title.prop_map(|title| Action::AddColumn { title }),
            (any_column(), title).prop_map(|(column, title)| Action::AddCard {
                column,
                title,
                description: None,
            }),
            (1u64..8, 1u64..8).prop_map(|(col, card)| Action::DeleteCard {
                column_id: ColumnId(col),
                card_id: CardId(card),
            }),
            (1u64..8, title).prop_map(|(card, title)| Action::EditCard {
                card_id: CardId(card),
                title,
                description: String::new(),
            }),
            (1u64..8, 1u64..8, 0usize..6).prop_map(|(col, card, index)| {
                Action::MoveCardToPosition {
                    column_id: ColumnId(col),
                    card_id: CardId(card),
                    index,
                }
            }),
            (1u64..8, any_column()).prop_map(|(card, target)| Action::MoveCardBetweenColumns {
                card_id: CardId(card),
                target,
            }),
            (4u64..8).prop_map(|col| Action::DeleteColumn {
                column_id: ColumnId(col),
            }),
        ]
    }

    fn card_ids(board: &Board) -> Vec<u64> {
        let mut ids: Vec<u64> = board.cards().map(|c| c.id.0).collect();
        ids.sort_unstable();
        ids
    }

    proptest! {
        #[test]
        fn card_ids_stay_unique(actions in prop::collection::vec(any_action(), 0..40)) {
            let mut store = Store::seeded();
            for action in actions {
                let _ = store.dispatch(action);
                let ids = card_ids(store.board());
                let mut deduped = ids.clone();
                deduped.dedup();
                prop_assert_eq!(ids, deduped);
            }
        }

        #[test]
        fn column_titles_stay_unique(actions in prop::collection::vec(any_action(), 0..40)) {
            let mut store = Store::seeded();
            for action in actions {
                let _ = store.dispatch(action);
                let mut titles: Vec<&str> =
                    store.board().columns.iter().map(|c| c.title.as_str()).collect();
                let total = titles.len();
                titles.sort_unstable();
                titles.dedup();
                prop_assert_eq!(titles.len(), total);
            }
        }

        #[test]
        fn failed_actions_leave_board_unchanged(actions in prop::collection::vec(any_action(), 0..40)) {
            let mut store = Store::seeded();
            for action in actions {
                let before = store.board().clone();
                if !store.dispatch(action).is_applied() {
                    prop_assert_eq!(store.board(), &before);
                }
            }
        }

        #[test]
        fn moves_preserve_card_count(
            moves in prop::collection::vec((1u64..5, 0usize..3, 0usize..4), 0..30)
        ) {
            let mut store = Store::seeded();
            let titles = [seed::TODO, seed::IN_PROGRESS, seed::DONE];
            for (card, target, index) in moves {
                let _ = store.dispatch(Action::MoveCardBetweenColumns {
                    card_id: CardId(card),
                    target: titles[target].to_string(),
                });
                if let Some((column, _)) = store.board().find_card(CardId(card)) {
                    let column_id = column.id;
                    let _ = store.dispatch(Action::MoveCardToPosition {
                        column_id,
                        card_id: CardId(card),
                        index,
                    });
                }
                prop_assert_eq!(store.board().total_cards(), 4);
                prop_assert_eq!(card_ids(store.board()), vec![1, 2, 3, 4]);
            }
        }

        #[test]
        fn stored_titles_respect_limits(actions in prop::collection::vec(any_action(), 0..40)) {
            let mut store = Store::seeded();
            for action in actions {
                let _ = store.dispatch(action);
            }
            for column in &store.board().columns {
                prop_assert!(validate_column_title(&column.title).is_ok());
                for card in &column.cards {
                    prop_assert!(validate_card_title(&card.title).is_ok());
                }
            }
        }
    }
}
