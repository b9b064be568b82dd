//! Widget components for the quadro TUI.
//!
//! Each widget is a pure function that renders state to a buffer. This
//! enables easy testing and composition.
//!
//! # Modules
//!
//! - [`board`]: Renders every column side by side
//! - [`column`]: Renders one column with its cards
//! - [`card`]: Renders a single card
//! - [`form`]: Add-card and add-column popups
//! - [`edit_modal`]: The edit-card popup
//! - [`alert`]: Blocking alert overlay
//! - [`help`]: Keybinding overlay
//! - [`status_bar`]: Footer with hints and the latest notice
//!
//! # Example
//!
//! ```
//! use quadro_protocol::seed::seeded_board;
//! use quadro_tui::widgets;
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//!
//! let board = seeded_board(true);
//! let area = Rect::new(0, 0, 80, 24);
//! let mut buf = Buffer::empty(area);
//!
//! widgets::render_board(&board, 0, Some(0), None, area, &mut buf);
//! ```

pub mod alert;
pub mod board;
pub mod card;
pub mod column;
pub mod edit_modal;
pub mod form;
pub mod help;
pub mod status_bar;

pub use alert::render_alert;
pub use board::render_board;
pub use card::{CardHighlight, render_card};
pub use column::{ColumnPosition, ColumnView, card_areas, render_column};
pub use edit_modal::render_edit_modal;
pub use form::{render_card_form, render_column_form};
pub use help::render_help_overlay;
pub use status_bar::{BOARD_HINTS, FORM_HINTS, render_status_bar};
