//! Add-card form state.
//!
//! The form is bound to one column and collects a title and an optional
//! description. Submitting validates the title locally; a valid form turns
//! into an [`Action::AddCard`] and clears its drafts, an invalid one keeps
//! them and shows the validation message inline.

use quadro_protocol::{Action, CARD_TITLE_MAX, validate_card_title};

use crate::input::TextInput;

/// Which field of a two-field form has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    /// The title line.
    #[default]
    Title,
    /// The description line.
    Description,
}

impl Field {
    /// Returns the other field.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Title => Self::Description,
            Self::Description => Self::Title,
        }
    }
}

/// Draft state of the add-card form.
///
/// # Examples
///
/// ```
/// use quadro_protocol::Action;
/// use quadro_tui::card_form::CardFormState;
///
/// let mut form = CardFormState::new("A Fazer");
/// for ch in "Card 5".chars() {
///     form.input_char(ch);
/// }
///
/// let action = form.submit().unwrap();
/// assert!(matches!(action, Action::AddCard { ref column, .. } if column == "A Fazer"));
/// assert!(form.title().is_blank());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardFormState {
    column_title: String,
    title: TextInput,
    description: TextInput,
    focus: Field,
    error: Option<String>,
}

impl CardFormState {
    /// Opens an empty form targeting the column with the given title.
    #[must_use]
    pub fn new(column_title: impl Into<String>) -> Self {
        Self {
            column_title: column_title.into(),
            title: TextInput::with_max_chars(CARD_TITLE_MAX),
            description: TextInput::new(),
            focus: Field::Title,
            error: None,
        }
    }

    /// Title of the column new cards are added to.
    #[must_use]
    pub fn column_title(&self) -> &str {
        &self.column_title
    }

    /// The title draft.
    #[must_use]
    pub fn title(&self) -> &TextInput {
        &self.title
    }

    /// The description draft.
    #[must_use]
    pub fn description(&self) -> &TextInput {
        &self.description
    }

    /// The focused field.
    #[must_use]
    pub fn focus(&self) -> Field {
        self.focus
    }

    /// The inline validation message, if the last submission failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn focused_mut(&mut self) -> &mut TextInput {
        match self.focus {
            Field::Title => &mut self.title,
            Field::Description => &mut self.description,
        }
    }

    /// Types a character into the focused field.
    pub fn input_char(&mut self, ch: char) {
        self.focused_mut().insert_char(ch);
    }

    /// Deletes the character before the cursor in the focused field.
    pub fn backspace(&mut self) {
        self.focused_mut().backspace();
    }

    /// Moves focus to the other field.
    pub fn switch_field(&mut self) {
        self.focus = self.focus.next();
    }

    /// Validates the drafts and, if valid, returns the add-card action.
    ///
    /// On success the drafts are cleared and focus returns to the title. On
    /// failure nothing is emitted and the drafts are kept.
    pub fn submit(&mut self) -> Option<Action> {
        if let Err(err) = validate_card_title(self.title.value()) {
            self.error = Some(err.to_string());
            return None;
        }

        let description = (!self.description.is_blank()).then(|| self.description.value().to_string());
        let action = Action::AddCard {
            column: self.column_title.clone(),
            title: self.title.value().to_string(),
            description,
        };

        self.title.clear();
        self.description.clear();
        self.focus = Field::Title;
        self.error = None;
        Some(action)
    }
}
