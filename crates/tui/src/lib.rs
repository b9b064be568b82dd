//! Terminal UI for the quadro kanban board.
//!
//! This crate provides a Ratatui-based terminal interface for viewing and
//! editing the board held by a [`quadro_protocol::Store`].
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`app`]: Main application struct and run loop
//! - [`state`]: Application state, modes and drag handling
//! - [`card_form`], [`column_form`], [`edit_modal`]: Draft state of the popups
//! - [`input`]: Single-line text input
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`event`]: Event handling and key mappings
//! - [`layout`]: Shared measurements for rendering and hit-testing
//! - [`widgets`]: Pure rendering functions
//!
//! # Example
//!
//! ```no_run
//! use quadro_config::Config;
//! use quadro_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal(config.ui.mouse)?;
//!
//!     let mut app = App::with_config(&config);
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod card_form;
pub mod column_form;
pub mod edit_modal;
pub mod event;
pub mod input;
pub mod layout;
pub mod state;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

pub use app::App;
pub use state::{AppState, DragState, Mode};
