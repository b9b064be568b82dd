//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages. Board mode and form mode have separate key maps:
//! while a form is open, letters are text, not commands.

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use quadro_protocol::Message;

/// Default poll timeout for events.
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Polls for a terminal event with the default timeout.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event() -> std::io::Result<Option<Event>> {
    if event::poll(POLL_TIMEOUT)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Converts an event (keyboard or mouse) to an application message.
///
/// `form_open` selects the form key map for keyboard events. Mouse events
/// map the same way in every mode.
#[must_use]
pub fn event_to_message(event: &Event, form_open: bool) -> Option<Message> {
    match event {
        Event::Key(key) if form_open => key_to_form_message(*key),
        Event::Key(key) => key_to_message(*key),
        Event::Mouse(mouse) => mouse_to_message(mouse),
        _ => None,
    }
}

/// Converts a mouse event to an application message.
///
/// Left-button press and release are reported separately; the app pairs
/// them up into drags and clicks.
#[must_use]
fn mouse_to_message(mouse: &MouseEvent) -> Option<Message> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Message::PressAt {
            column: mouse.column,
            row: mouse.row,
        }),
        MouseEventKind::Up(MouseButton::Left) => Some(Message::ReleaseAt {
            column: mouse.column,
            row: mouse.row,
        }),
        _ => None,
    }
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

/// Converts a terminal key event to a board-mode message.
///
/// Returns `Some(Message)` if the key event maps to an action,
/// or `None` if the key is not bound.
///
/// # Key Bindings
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Esc` | Escape (clear selection) |
/// | `Left` | Navigate left |
/// | `Right` | Navigate right |
/// | `Up` | Navigate up |
/// | `Down` | Navigate down |
/// | `Enter` or `Space` | Edit selected card |
/// | `n` | New card in focused column |
/// | `c` | New column |
/// | `d` | Delete selected card |
/// | `t` | Move selected card to top |
/// | `D` | Delete focused column |
/// | `?` | Toggle help |
#[must_use]
pub fn key_to_message(key: KeyEvent) -> Option<Message> {
    if is_ctrl_c(&key) {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Esc => Some(Message::Escape),

        KeyCode::Left => Some(Message::NavigateLeft),
        KeyCode::Right => Some(Message::NavigateRight),
        KeyCode::Up => Some(Message::NavigateUp),
        KeyCode::Down => Some(Message::NavigateDown),

        KeyCode::Enter | KeyCode::Char(' ') => Some(Message::Select),

        KeyCode::Char('n') => Some(Message::NewCard),
        KeyCode::Char('c') => Some(Message::NewColumn),
        KeyCode::Char('d') => Some(Message::DeleteCard),
        KeyCode::Char('t') => Some(Message::MoveToTop),
        KeyCode::Char('D') => Some(Message::DeleteColumn),
        KeyCode::Char('?') => Some(Message::ToggleHelp),

        _ => None,
    }
}

/// Converts a key event to a form-mode message.
///
/// Used while the add-card form, the add-column form or the edit modal is
/// open.
///
/// # Key Bindings (Form Mode)
///
/// | Key | Action |
/// |-----|--------|
/// | `Ctrl+C` | Quit |
/// | `Enter` | Submit |
/// | `Esc` | Cancel |
/// | `Tab` / `Shift+Tab` | Switch field |
/// | `Backspace` | Delete character |
/// | Any char | Input |
#[must_use]
pub fn key_to_form_message(key: KeyEvent) -> Option<Message> {
    if is_ctrl_c(&key) {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Enter => Some(Message::Submit),
        KeyCode::Esc => Some(Message::Cancel),
        KeyCode::Tab | KeyCode::BackTab => Some(Message::SwitchField),
        KeyCode::Backspace => Some(Message::Backspace),
        KeyCode::Char(_) if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            None
        }
        KeyCode::Char(ch) => Some(Message::Input { ch }),
        _ => None,
    }
}
