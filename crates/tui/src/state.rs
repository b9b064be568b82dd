//! Application state management.
//!
//! [`AppState`] owns the [`Store`] along with everything the UI needs on top
//! of it: the current mode (board, one of the forms, or the edit modal), the
//! selection, overlays, and an in-progress mouse drag. All board changes go
//! through [`AppState::dispatch`], which routes the store's verdict to the
//! right place: user-facing rejections become a blocking alert, stale
//! references are only logged.

use quadro_protocol::{
    Action, Board, Card, CardId, Column, ColumnId, Dispatch, DragPayload, MoveCard, Store,
};
use tracing::{debug, info};

use crate::card_form::CardFormState;
use crate::column_form::ColumnFormState;
use crate::edit_modal::EditModalState;

/// What currently receives input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    /// Navigating the board.
    #[default]
    Board,
    /// The add-card form is open.
    CardForm(CardFormState),
    /// The add-column form is open.
    ColumnForm(ColumnFormState),
    /// The edit modal is open on one card.
    EditCard(EditModalState),
}

impl Mode {
    /// Returns `true` if a form or the modal is capturing text input.
    #[must_use]
    pub fn is_form(&self) -> bool {
        !matches!(self, Self::Board)
    }
}

/// A card picked up with the mouse and not yet dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragState {
    /// Payload carried by the drag.
    pub payload: DragPayload,
    /// Column the card was picked up from.
    pub source: ColumnId,
}

/// The application state.
#[derive(Debug)]
pub struct AppState {
    store: Store,
    /// Current input mode.
    pub mode: Mode,
    /// Index of the selected column.
    pub selected_column: usize,
    /// Index of the selected card within the selected column, if any.
    pub selected_card: Option<usize>,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
    /// Blocking message shown on top of everything until dismissed.
    pub alert: Option<String>,
    /// Last status message, shown in the status bar.
    pub notice: Option<String>,
    /// Card currently being dragged.
    pub drag: Option<DragState>,
}

impl AppState {
    /// Creates a new application state around a store.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadro_protocol::Store;
    /// use quadro_tui::AppState;
    ///
    /// let state = AppState::new(Store::seeded());
    /// assert_eq!(state.selected_column, 0);
    /// assert_eq!(state.board().columns.len(), 3);
    /// ```
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self {
            store,
            mode: Mode::Board,
            selected_column: 0,
            selected_card: None,
            help_visible: false,
            alert: None,
            notice: None,
            drag: None,
        }
    }

    /// Returns the current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        self.store.board()
    }

    /// Returns the selected column, if the board has any columns.
    #[must_use]
    pub fn selected_column(&self) -> Option<&Column> {
        self.board().columns.get(self.selected_column)
    }

    /// Returns the selected card, if any.
    #[must_use]
    pub fn selected_card(&self) -> Option<&Card> {
        let idx = self.selected_card?;
        self.selected_column()?.cards.get(idx)
    }

    /// Applies an action and routes the outcome.
    ///
    /// Rejections raise the alert overlay. The selection is clamped after
    /// every applied change.
    pub fn dispatch(&mut self, action: Action) -> Dispatch {
        let outcome = self.store.dispatch(action);
        match &outcome {
            Dispatch::Applied => self.clamp_selection(),
            Dispatch::Rejected(err) => self.alert = Some(err.to_string()),
            Dispatch::Ignored(_) => {}
        }
        outcome
    }

    // --- Overlays ---

    /// Toggles the help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Dismisses the help overlay if it is visible.
    ///
    /// Returns `true` if help was visible and has been dismissed.
    #[must_use]
    pub fn dismiss_help(&mut self) -> bool {
        std::mem::take(&mut self.help_visible)
    }

    /// Dismisses the alert if one is showing.
    ///
    /// Returns `true` if an alert was dismissed.
    #[must_use]
    pub fn dismiss_alert(&mut self) -> bool {
        self.alert.take().is_some()
    }

    // --- Navigation ---

    /// Moves the column selection to the left, wrapping around.
    pub fn navigate_left(&mut self) {
        let count = self.board().columns.len();
        if count == 0 {
            return;
        }
        self.selected_column = (self.selected_column + count - 1) % count;
        self.clamp_card_selection();
    }

    /// Moves the column selection to the right, wrapping around.
    pub fn navigate_right(&mut self) {
        let count = self.board().columns.len();
        if count == 0 {
            return;
        }
        self.selected_column = (self.selected_column + 1) % count;
        self.clamp_card_selection();
    }

    /// Moves the card selection up within the current column, wrapping.
    pub fn navigate_up(&mut self) {
        let len = self.selected_column().map_or(0, Column::len);
        if len == 0 {
            self.selected_card = None;
            return;
        }
        self.selected_card = Some(match self.selected_card {
            Some(idx) if idx > 0 => idx - 1,
            Some(_) => len - 1,
            None => 0,
        });
    }

    /// Moves the card selection down within the current column, wrapping.
    pub fn navigate_down(&mut self) {
        let len = self.selected_column().map_or(0, Column::len);
        if len == 0 {
            self.selected_card = None;
            return;
        }
        self.selected_card = Some(match self.selected_card {
            Some(idx) if idx + 1 < len => idx + 1,
            Some(_) | None => 0,
        });
    }

    /// Clears the current card selection.
    pub fn clear_selection(&mut self) {
        self.selected_card = None;
    }

    /// Selects a card wherever it is on the board.
    ///
    /// Returns `false` if the card is not on the board.
    pub fn select_card(&mut self, id: CardId) -> bool {
        let found = self
            .board()
            .columns
            .iter()
            .enumerate()
            .find_map(|(col_idx, col)| col.position_of(id).map(|card_idx| (col_idx, card_idx)));
        match found {
            Some((col_idx, card_idx)) => {
                self.selected_column = col_idx;
                self.selected_card = Some(card_idx);
                true
            }
            None => false,
        }
    }

    fn clamp_selection(&mut self) {
        let count = self.board().columns.len();
        if self.selected_column >= count {
            self.selected_column = count.saturating_sub(1);
        }
        self.clamp_card_selection();
    }

    fn clamp_card_selection(&mut self) {
        let len = self.selected_column().map_or(0, Column::len);
        if len == 0 {
            self.selected_card = None;
        } else if let Some(idx) = self.selected_card
            && idx >= len
        {
            self.selected_card = Some(len - 1);
        }
    }

    // --- Board commands ---

    /// Deletes the selected card.
    pub fn delete_selected_card(&mut self) {
        let Some((column_id, card_id)) = self.selected_ids() else {
            return;
        };
        if self
            .dispatch(Action::DeleteCard { column_id, card_id })
            .is_applied()
        {
            self.notice = Some("Card deleted".to_string());
        }
    }

    /// Moves the selected card to the top of its column.
    pub fn move_selected_to_top(&mut self) {
        let Some((column_id, card_id)) = self.selected_ids() else {
            return;
        };
        if self
            .dispatch(Action::move_to_top(column_id, card_id))
            .is_applied()
        {
            self.selected_card = Some(0);
            self.notice = Some("Card moved to top".to_string());
        }
    }

    /// Deletes the selected column, if it was created by the user.
    ///
    /// Seeded columns are never offered for deletion; asking anyway does
    /// nothing.
    pub fn delete_selected_column(&mut self) {
        let Some(column) = self.selected_column() else {
            return;
        };
        if !column.is_deletable() {
            debug!(column = %column.title, "seeded column cannot be deleted");
            return;
        }
        let (column_id, title) = (column.id, column.title.clone());
        if self.dispatch(Action::DeleteColumn { column_id }).is_applied() {
            self.notice = Some(format!("Column \"{title}\" deleted"));
        }
    }

    fn selected_ids(&self) -> Option<(ColumnId, CardId)> {
        let column = self.selected_column()?;
        let card = column.cards.get(self.selected_card?)?;
        Some((column.id, card.id))
    }

    // --- Forms and modal ---

    /// Opens the add-card form on the selected column.
    pub fn open_card_form(&mut self) {
        if let Some(column) = self.selected_column() {
            self.mode = Mode::CardForm(CardFormState::new(column.title.as_str()));
        }
    }

    /// Opens the add-column form.
    pub fn open_column_form(&mut self) {
        self.mode = Mode::ColumnForm(ColumnFormState::new());
    }

    /// Opens the edit modal on the selected card.
    pub fn open_edit_modal(&mut self) {
        if let Some((_, card_id)) = self.selected_ids() {
            self.open_edit_for(card_id);
        }
    }

    /// Opens the edit modal on a specific card.
    pub fn open_edit_for(&mut self, card_id: CardId) {
        let modal = self
            .board()
            .find_card(card_id)
            .map(|(column, card)| EditModalState::open(card, column.title.as_str()));
        if let Some(modal) = modal {
            debug!(card = %card_id, "edit modal opened");
            self.select_card(card_id);
            self.mode = Mode::EditCard(modal);
        }
    }

    /// Closes any open form or modal without saving.
    pub fn cancel_form(&mut self) {
        self.mode = Mode::Board;
    }

    /// Types a character into the open form.
    pub fn form_input(&mut self, ch: char) {
        match &mut self.mode {
            Mode::Board => {}
            Mode::CardForm(form) => form.input_char(ch),
            Mode::ColumnForm(form) => form.input_char(ch),
            Mode::EditCard(modal) => modal.input_char(ch),
        }
    }

    /// Deletes a character in the open form.
    pub fn form_backspace(&mut self) {
        match &mut self.mode {
            Mode::Board => {}
            Mode::CardForm(form) => form.backspace(),
            Mode::ColumnForm(form) => form.backspace(),
            Mode::EditCard(modal) => modal.backspace(),
        }
    }

    /// Switches field in the open form.
    pub fn form_switch_field(&mut self) {
        match &mut self.mode {
            Mode::CardForm(form) => form.switch_field(),
            Mode::EditCard(modal) => modal.switch_field(),
            Mode::Board | Mode::ColumnForm(_) => {}
        }
    }

    /// Submits the open form or confirms the modal.
    ///
    /// Invalid input keeps the form open with its inline message. A store
    /// rejection keeps it open behind the alert. Anything else closes it.
    pub fn submit_form(&mut self) {
        let action = match &mut self.mode {
            Mode::Board => return,
            Mode::CardForm(form) => form.submit(),
            Mode::ColumnForm(form) => form.submit(),
            Mode::EditCard(modal) => modal.confirm(),
        };
        let Some(action) = action else {
            return;
        };

        let notice = match &action {
            Action::AddCard { column, .. } => format!("Card added to \"{column}\""),
            Action::AddColumn { title } => format!("Column \"{title}\" added"),
            _ => "Card updated".to_string(),
        };
        let added_to = match &action {
            Action::AddCard { column, .. } => Some(column.clone()),
            _ => None,
        };

        match self.dispatch(action) {
            Dispatch::Rejected(_) => {}
            Dispatch::Applied => {
                self.mode = Mode::Board;
                self.notice = Some(notice);
                if let Some(column) = added_to {
                    self.select_last_in(&column);
                }
            }
            Dispatch::Ignored(err) => {
                debug!(error = %err, "form submission had no effect");
                self.mode = Mode::Board;
            }
        }
    }

    fn select_last_in(&mut self, column_title: &str) {
        let found = self
            .board()
            .columns
            .iter()
            .position(|col| col.title == column_title)
            .map(|idx| (idx, self.board().columns[idx].len()));
        if let Some((idx, len)) = found {
            self.selected_column = idx;
            self.selected_card = len.checked_sub(1);
        }
    }

    // --- Drag and drop ---

    /// Picks up a card with the mouse.
    pub fn start_drag(&mut self, card_id: CardId) {
        let Some((column, _)) = self.board().find_card(card_id) else {
            return;
        };
        let source = column.id;
        debug!(card = %card_id, column = %source, "drag started");
        self.drag = Some(DragState {
            payload: DragPayload::for_card(card_id),
            source,
        });
        self.select_card(card_id);
    }

    /// Drops the dragged card on a column.
    ///
    /// Dropping on the column the card came from, or on nothing, just ends
    /// the drag.
    pub fn drop_on(&mut self, target: Option<ColumnId>) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        let Some(target) = target else {
            debug!("drag cancelled outside any column");
            return;
        };

        let command = match MoveCard::resolve(self.board(), &drag.payload, target) {
            Ok(command) => command,
            Err(err) => {
                debug!(error = %err, "drop ignored");
                return;
            }
        };
        if command.is_same_column() {
            debug!(card = %command.card_id, "dropped on its own column");
            return;
        }

        let card_id = command.card_id;
        let title = command.target_title.clone();
        if self.dispatch(command.into()).is_applied() {
            info!(card = %card_id, target = %title, "card moved");
            self.select_card(card_id);
            self.notice = Some(format!("Card moved to \"{title}\""));
        }
    }
}
