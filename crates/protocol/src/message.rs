//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the TUI input handler and the application state.

use serde::{Deserialize, Serialize};

/// Messages that represent user actions in the TUI.
///
/// These messages are produced by the input handler and consumed by
/// the application state to update the UI.
///
/// # Examples
///
/// ```
/// use quadro_protocol::Message;
///
/// let msg = Message::NavigateRight;
/// assert!(matches!(msg, Message::NavigateRight));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Move selection to the left column.
    NavigateLeft,
    /// Move selection to the right column.
    NavigateRight,
    /// Move selection up within the current column.
    NavigateUp,
    /// Move selection down within the current column.
    NavigateDown,
    /// Open the edit modal for the selected card.
    Select,
    /// Close the topmost overlay or clear the selection.
    Escape,
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // --- Board commands ---
    /// Open the add-card form on the selected column.
    NewCard,
    /// Open the add-column form.
    NewColumn,
    /// Delete the selected card.
    DeleteCard,
    /// Delete the selected column, if it was user-created.
    DeleteColumn,
    /// Move the selected card to the top of its column.
    MoveToTop,

    // --- Mouse ---
    /// Mouse button pressed at coordinates (column, row).
    PressAt {
        /// Column (x coordinate) of the press.
        column: u16,
        /// Row (y coordinate) of the press.
        row: u16,
    },
    /// Mouse button released at coordinates (column, row).
    ReleaseAt {
        /// Column (x coordinate) of the release.
        column: u16,
        /// Row (y coordinate) of the release.
        row: u16,
    },

    // --- Form messages ---
    /// Type a character into the focused field.
    Input {
        /// The character that was typed.
        ch: char,
    },
    /// Delete the character before the cursor.
    Backspace,
    /// Move focus to the next field.
    SwitchField,
    /// Submit the open form or modal.
    Submit,
    /// Close the open form or modal without saving.
    Cancel,
}

impl Message {
    /// Returns `true` if this message is a navigation action.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadro_protocol::Message;
    ///
    /// assert!(Message::NavigateLeft.is_navigation());
    /// assert!(!Message::Select.is_navigation());
    /// ```
    #[must_use]
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::NavigateLeft | Self::NavigateRight | Self::NavigateUp | Self::NavigateDown
        )
    }

    /// Returns `true` if this message should terminate the application.
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Quit)
    }

    /// Returns `true` if this message only makes sense while a form is open.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadro_protocol::Message;
    ///
    /// assert!(Message::Input { ch: 'a' }.is_form_input());
    /// assert!(Message::Submit.is_form_input());
    /// assert!(!Message::NewCard.is_form_input());
    /// ```
    #[must_use]
    pub fn is_form_input(&self) -> bool {
        matches!(
            self,
            Self::Input { .. } | Self::Backspace | Self::SwitchField | Self::Submit | Self::Cancel
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_navigation_detection() {
        assert!(Message::NavigateLeft.is_navigation());
        assert!(Message::NavigateRight.is_navigation());
        assert!(Message::NavigateUp.is_navigation());
        assert!(Message::NavigateDown.is_navigation());
        assert!(!Message::Select.is_navigation());
        assert!(!Message::MoveToTop.is_navigation());
        assert!(!Message::Quit.is_navigation());
    }

    #[test]
    fn message_terminating_detection() {
        assert!(Message::Quit.is_terminating());
        assert!(!Message::Escape.is_terminating());
        assert!(!Message::Cancel.is_terminating());
    }

    #[test]
    fn message_form_input_detection() {
        assert!(Message::Input { ch: 'x' }.is_form_input());
        assert!(Message::Backspace.is_form_input());
        assert!(Message::SwitchField.is_form_input());
        assert!(Message::Cancel.is_form_input());
        assert!(!Message::DeleteCard.is_form_input());
        assert!(!Message::PressAt { column: 1, row: 1 }.is_form_input());
    }

    #[test]
    fn message_json_format() {
        let json = serde_json::to_string(&Message::MoveToTop).expect("serialize");
        assert_eq!(json, r#""move_to_top""#);

        let json = serde_json::to_string(&Message::PressAt { column: 3, row: 4 }).expect("serialize");
        assert_eq!(json, r#"{"press_at":{"column":3,"row":4}}"#);
    }
}
