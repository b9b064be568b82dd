//! Edit-card modal state.
//!
//! The modal opens on one card, seeded with its current title and
//! description, and shows the card's column as a read-only tag. Confirming
//! produces an [`Action::EditCard`]; cancelling simply drops the state.

use quadro_protocol::{Action, CARD_TITLE_MAX, Card, CardId, validate_card_title};

use crate::card_form::Field;
use crate::input::TextInput;

/// Draft state of the edit modal.
///
/// # Examples
///
/// ```
/// use quadro_protocol::{Action, Card, CardId};
/// use quadro_tui::edit_modal::EditModalState;
///
/// let card = Card::new(CardId(3), "Card 3", "Descrição do Card 3");
/// let mut modal = EditModalState::open(&card, "Em progresso");
/// assert_eq!(modal.title().value(), "Card 3");
///
/// modal.input_char('!');
/// assert_eq!(
///     modal.confirm(),
///     Some(Action::EditCard {
///         card_id: CardId(3),
///         title: "Card 3!".into(),
///         description: "Descrição do Card 3".into(),
///     })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditModalState {
    card_id: CardId,
    column_title: String,
    title: TextInput,
    description: TextInput,
    focus: Field,
    error: Option<String>,
}

impl EditModalState {
    /// Opens the modal on `card`, which lives in the column titled
    /// `column_title`.
    #[must_use]
    pub fn open(card: &Card, column_title: impl Into<String>) -> Self {
        Self {
            card_id: card.id,
            column_title: column_title.into(),
            title: TextInput::with_max_chars(CARD_TITLE_MAX).with_value(card.title.as_str()),
            description: TextInput::new().with_value(card.description.as_str()),
            focus: Field::Title,
            error: None,
        }
    }

    /// The card being edited.
    #[must_use]
    pub fn card_id(&self) -> CardId {
        self.card_id
    }

    /// Title of the card's column, shown as a tag.
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

    /// The inline validation message, if the last confirmation failed.
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

    /// Validates the drafts and, if valid, returns the edit action.
    pub fn confirm(&mut self) -> Option<Action> {
        if let Err(err) = validate_card_title(self.title.value()) {
            self.error = Some(err.to_string());
            return None;
        }
        self.error = None;
        Some(Action::EditCard {
            card_id: self.card_id,
            title: self.title.value().to_string(),
            description: self.description.value().to_string(),
        })
    }
}
