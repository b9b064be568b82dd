//! Main application struct and run loop.
//!
//! This module provides the `App` struct which orchestrates the TUI
//! application lifecycle including event handling, state updates, and rendering.

use crossterm::event::Event;
use quadro_config::{Config, IdStrategy};
use quadro_protocol::{
    CardId, ClockIds, IdGenerator, Message, SequentialIds, Store, seed::seeded_board,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};
use tracing::{debug, info, trace};

use crate::{
    AppState,
    event::{event_to_message, poll_event},
    layout::{
        HEADER_HEIGHT, MIN_HEIGHT, MIN_HEIGHT_WITH_HEADER, MIN_WIDTH, STATUS_BAR_HEIGHT,
        column_areas,
    },
    state::Mode,
    terminal::AppTerminal,
    widgets::{
        BOARD_HINTS, ColumnPosition, FORM_HINTS, card_areas, render_alert, render_board,
        render_card_form, render_column_form, render_edit_modal, render_help_overlay,
        render_status_bar,
    },
};

/// Title shown in the header bar.
const APP_TITLE: &str = "Quadro Kanban";

/// The main application struct.
///
/// Manages the application state and provides the main event loop.
#[derive(Debug)]
pub struct App {
    state: AppState,
    should_quit: bool,
    /// Board area from the last render, used for mouse hit-testing. `None`
    /// when the terminal was too small to draw the board.
    board_area: Option<Rect>,
    /// Whether the header was shown in the last render.
    header_visible: bool,
}

impl App {
    /// Creates a new application around a store.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadro_protocol::Store;
    /// use quadro_tui::App;
    ///
    /// let app = App::new(Store::seeded());
    /// assert_eq!(app.state().board().columns.len(), 3);
    /// ```
    #[must_use]
    pub fn new(store: Store) -> Self {
        Self {
            state: AppState::new(store),
            should_quit: false,
            board_area: None,
            header_visible: true,
        }
    }

    /// Creates a new application whose starting board follows `config`.
    ///
    /// # Examples
    ///
    /// ```
    /// use quadro_config::Config;
    /// use quadro_tui::App;
    ///
    /// let mut config = Config::default();
    /// config.board.sample_cards = false;
    ///
    /// let app = App::with_config(&config);
    /// assert_eq!(app.state().board().total_cards(), 0);
    /// ```
    #[must_use]
    pub fn with_config(config: &Config) -> Self {
        let board = seeded_board(config.board.sample_cards);
        let ids: Box<dyn IdGenerator + Send> = match config.board.ids {
            IdStrategy::Sequential => Box::new(SequentialIds::after(&board)),
            IdStrategy::Clock => {
                let floor = board
                    .cards()
                    .map(|card| card.id.0)
                    .chain(board.columns.iter().map(|col| col.id.0))
                    .max()
                    .unwrap_or(0);
                Box::new(ClockIds::above(floor))
            }
        };
        info!(
            sample_cards = config.board.sample_cards,
            ids = ?config.board.ids,
            "board created"
        );
        Self::new(Store::new(board, ids))
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns whether the application is about to exit.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Updates the application state based on a message.
    ///
    /// `Quit` always works. Otherwise an alert swallows the message and
    /// closes; then the help overlay does the same (only `?` and `Esc` are
    /// treated as toggles). Everything else goes to the board or to the open
    /// form.
    pub fn update(&mut self, msg: Message) {
        if msg.is_terminating() {
            self.should_quit = true;
            return;
        }

        if self.state.dismiss_alert() {
            return;
        }

        if self.state.help_visible {
            match msg {
                Message::ToggleHelp | Message::Escape => self.state.toggle_help(),
                _ => {
                    let _ = self.state.dismiss_help();
                }
            }
            return;
        }

        if self.state.mode.is_form() {
            self.update_form(msg);
        } else if msg.is_form_input() {
            trace!(msg = ?msg, "form input without an open form");
        } else {
            self.update_board(msg);
        }
    }

    fn update_board(&mut self, msg: Message) {
        // Notices describe the last change; moving around retires them.
        if msg.is_navigation() {
            self.state.notice = None;
        }
        match msg {
            Message::NavigateLeft => self.state.navigate_left(),
            Message::NavigateRight => self.state.navigate_right(),
            Message::NavigateUp => self.state.navigate_up(),
            Message::NavigateDown => self.state.navigate_down(),
            Message::Select => self.state.open_edit_modal(),
            Message::Escape => self.state.clear_selection(),
            Message::ToggleHelp => self.state.toggle_help(),
            Message::NewCard => self.state.open_card_form(),
            Message::NewColumn => self.state.open_column_form(),
            Message::DeleteCard => self.state.delete_selected_card(),
            Message::DeleteColumn => self.state.delete_selected_column(),
            Message::MoveToTop => self.state.move_selected_to_top(),
            Message::PressAt { column, row } => self.handle_press(column, row),
            Message::ReleaseAt { column, row } => self.handle_release(column, row),
            other => trace!(msg = ?other, "ignored on the board"),
        }
    }

    fn update_form(&mut self, msg: Message) {
        match msg {
            Message::Input { ch } => self.state.form_input(ch),
            Message::Backspace => self.state.form_backspace(),
            Message::SwitchField => self.state.form_switch_field(),
            Message::Submit => self.state.submit_form(),
            Message::Cancel | Message::Escape => self.state.cancel_form(),
            other => trace!(msg = ?other, "ignored while a form is open"),
        }
    }

    /// Finds the column and card under a screen position, using the layout
    /// of the last render.
    fn hit_test(&self, column: u16, row: u16) -> Option<(usize, Option<CardId>)> {
        let area = self.board_area?;
        let pos = Position::new(column, row);
        let board = self.state.board();
        let count = board.columns.len();

        let (idx, column_area) = column_areas(area, count)
            .into_iter()
            .enumerate()
            .find(|(_, a)| a.contains(pos))?;
        let col = board.columns.get(idx)?;
        let selected = if idx == self.state.selected_column {
            self.state.selected_card
        } else {
            None
        };

        let card = card_areas(col, selected, column_area, ColumnPosition::of(idx, count))
            .into_iter()
            .find(|(_, a)| a.contains(pos))
            .and_then(|(card_idx, _)| col.cards.get(card_idx))
            .map(|card| card.id);
        Some((idx, card))
    }

    /// A press on a card picks it up; a press elsewhere in a column focuses
    /// that column.
    fn handle_press(&mut self, column: u16, row: u16) {
        match self.hit_test(column, row) {
            Some((_, Some(card_id))) => self.state.start_drag(card_id),
            Some((idx, None)) => {
                self.state.selected_column = idx;
                self.state.selected_card = None;
            }
            None => {}
        }
    }

    /// A release on the card that was pressed is a click and opens the edit
    /// modal; a release anywhere else drops the card there.
    fn handle_release(&mut self, column: u16, row: u16) {
        let Some(dragged) = self.state.drag.as_ref().and_then(|d| d.payload.card_id().ok()) else {
            self.state.drag = None;
            return;
        };
        let hit = self.hit_test(column, row);

        if let Some((_, Some(card_id))) = hit
            && card_id == dragged
        {
            debug!(card = %card_id, "card clicked");
            self.state.drag = None;
            self.state.open_edit_for(card_id);
            return;
        }

        let target = hit
            .and_then(|(idx, _)| self.state.board().columns.get(idx))
            .map(|col| col.id);
        self.state.drop_on(target);
    }

    /// Renders the application UI to the given frame.
    ///
    /// Implements graceful degradation for small terminal sizes:
    /// - If terminal is below minimum dimensions, shows a "terminal too small" message.
    /// - If terminal is tight (below `MIN_HEIGHT_WITH_HEADER`), hides the header to reclaim space.
    /// - Otherwise, renders normally with header.
    ///
    /// Overlays stack in a fixed order: open form or modal, then help, then
    /// the alert on top.
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();

        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            self.header_visible = false;
            self.board_area = None;
            Self::render_terminal_too_small(frame, area);
            return;
        }

        let show_header = area.height >= MIN_HEIGHT_WITH_HEADER;
        self.header_visible = show_header;

        let header_height = if show_header { HEADER_HEIGHT } else { 0 };
        let [header_area, board_area, status_area] = Layout::vertical([
            Constraint::Length(header_height),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .areas(area);
        self.board_area = Some(board_area);

        if show_header {
            Self::render_header(frame, header_area);
        }

        let dragging = self
            .state
            .drag
            .as_ref()
            .and_then(|d| d.payload.card_id().ok());
        let buf = frame.buffer_mut();
        render_board(
            self.state.board(),
            self.state.selected_column,
            self.state.selected_card,
            dragging,
            board_area,
            buf,
        );

        let hints = if self.state.mode.is_form() {
            FORM_HINTS
        } else {
            BOARD_HINTS
        };
        let notice = if dragging.is_some() {
            Some("Release over another column to move the card")
        } else {
            self.state.notice.as_deref()
        };
        render_status_bar(hints, notice, status_area, buf);

        match &self.state.mode {
            Mode::Board => {}
            Mode::CardForm(form) => render_card_form(form, area, buf),
            Mode::ColumnForm(form) => render_column_form(form, area, buf),
            Mode::EditCard(modal) => render_edit_modal(modal, area, buf),
        }

        if self.state.help_visible {
            render_help_overlay(area, buf);
        }

        if let Some(message) = &self.state.alert {
            render_alert(message, area, buf);
        }
    }

    /// Renders a message indicating the terminal is too small.
    fn render_terminal_too_small(frame: &mut Frame, area: Rect) {
        let message = format!(
            "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );

        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false });

        let vertical_offset = area.height.saturating_sub(2) / 2;
        let centered_area = Rect {
            x: area.x,
            y: area.y + vertical_offset,
            width: area.width,
            height: area.height.saturating_sub(vertical_offset),
        };

        frame.render_widget(paragraph, centered_area);
    }

    /// Renders the header bar with title and help cue.
    fn render_header(frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [title_area, help_area] = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(17), // "Press ? for help" = 16 chars + padding
        ])
        .areas(inner);

        let title = Paragraph::new(Line::from(Span::styled(
            APP_TITLE,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(title, title_area);

        let help_cue = Paragraph::new(Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled("?", Style::default().fg(Color::Yellow)),
            Span::styled(" for help", Style::default().fg(Color::DarkGray)),
        ]))
        .alignment(Alignment::Right);
        frame.render_widget(help_cue, help_area);
    }

    /// Runs the main application loop.
    ///
    /// This function returns once the user quits the application.
    /// It polls for events, updates state, and renders the UI.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use quadro_protocol::Store;
    /// use quadro_tui::{App, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut terminal = terminal::setup_terminal(true)?;
    ///     let mut app = App::new(Store::seeded());
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        info!("event loop started");

        loop {
            terminal.draw(|frame| self.view(frame))?;

            if let Some(event) = poll_event()? {
                let mut msg = event_to_message(&event, self.state.mode.is_form());
                // Any key closes an alert, bound or not.
                if msg.is_none() && self.state.alert.is_some() && matches!(event, Event::Key(_)) {
                    msg = Some(Message::Escape);
                }
                if let Some(msg) = msg {
                    trace!(?msg, "message");
                    self.update(msg);
                }
            }

            if self.should_quit {
                break;
            }
        }

        info!("event loop finished");
        Ok(())
    }
}
