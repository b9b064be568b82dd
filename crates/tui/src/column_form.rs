//! Add-column form state.

use quadro_protocol::{Action, COLUMN_TITLE_MAX, validate_column_title};

use crate::input::TextInput;

/// Draft state of the add-column form.
///
/// Unlike the card form, a valid submission keeps the draft: the store may
/// still reject the title as a duplicate, in which case the user gets to fix
/// it in place. The owner discards the form once the column is added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnFormState {
    title: TextInput,
    error: Option<String>,
}

impl Default for ColumnFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ColumnFormState {
    /// Opens an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: TextInput::with_max_chars(COLUMN_TITLE_MAX),
            error: None,
        }
    }

    /// The title draft.
    #[must_use]
    pub fn title(&self) -> &TextInput {
        &self.title
    }

    /// The inline validation message, if the last submission failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Types a character into the title.
    pub fn input_char(&mut self, ch: char) {
        self.title.insert_char(ch);
    }

    /// Deletes the character before the cursor.
    pub fn backspace(&mut self) {
        self.title.backspace();
    }

    /// Validates the draft and, if valid, returns the add-column action.
    pub fn submit(&mut self) -> Option<Action> {
        match validate_column_title(self.title.value()) {
            Ok(()) => {
                self.error = None;
                Some(Action::AddColumn {
                    title: self.title.value().to_string(),
                })
            }
            Err(err) => {
                self.error = Some(err.to_string());
                None
            }
        }
    }
}
