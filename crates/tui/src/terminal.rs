//! Terminal setup and teardown utilities.
//!
//! Raw mode, the alternate screen and (optionally) mouse capture are switched
//! on together and off together. A panic hook undoes them before the panic
//! message is printed.

use std::io::{self, Stdout};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

/// The terminal type used by the application.
pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Error type for terminal operations.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    /// Failed to initialize the terminal.
    #[error("failed to setup terminal: {0}")]
    Setup(#[source] io::Error),

    /// Failed to restore the terminal.
    #[error("failed to restore terminal: {0}")]
    Restore(#[source] io::Error),
}

/// Sets up the terminal for TUI rendering.
///
/// This function:
/// - Enables raw mode (disables line buffering and echoing)
/// - Enters the alternate screen buffer
/// - Turns on mouse capture when `mouse` is set
/// - Creates a Ratatui terminal instance
///
/// # Errors
///
/// Returns an error if any terminal operation fails.
///
/// # Examples
///
/// ```no_run
/// use quadro_tui::terminal;
///
/// let mut terminal = terminal::setup_terminal(true).expect("failed to setup terminal");
/// // Use terminal...
/// terminal::restore_terminal(&mut terminal).expect("failed to restore terminal");
/// ```
pub fn setup_terminal(mouse: bool) -> Result<AppTerminal, TerminalError> {
    enable_raw_mode().map_err(TerminalError::Setup)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(TerminalError::Setup)?;
    if mouse {
        execute!(stdout, EnableMouseCapture).map_err(TerminalError::Setup)?;
    }
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(TerminalError::Setup)
}

/// Restores the terminal to its original state.
///
/// This function:
/// - Disables raw mode
/// - Leaves the alternate screen buffer
/// - Shows the cursor
///
/// Mouse capture is always switched off; doing so when it was never enabled
/// is harmless.
///
/// # Errors
///
/// Returns an error if any terminal operation fails.
///
/// # Examples
///
/// ```no_run
/// use quadro_tui::terminal;
///
/// let mut terminal = terminal::setup_terminal(false).expect("failed to setup terminal");
/// // Use terminal...
/// terminal::restore_terminal(&mut terminal).expect("failed to restore terminal");
/// ```
pub fn restore_terminal(terminal: &mut AppTerminal) -> Result<(), TerminalError> {
    disable_raw_mode().map_err(TerminalError::Restore)?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )
    .map_err(TerminalError::Restore)?;
    terminal.show_cursor().map_err(TerminalError::Restore)?;
    Ok(())
}

/// Installs a panic hook that restores the terminal before panicking.
///
/// This ensures that if the application panics, the terminal is left in a
/// usable state (not in raw mode, cursor visible, main screen buffer).
///
/// The previous hook still runs after the terminal is restored, so the
/// panic message lands on the normal screen. The panic is also logged, since
/// the log file is often the only place a crash leaves a trace.
///
/// Call this once at startup, before [`setup_terminal`].
///
/// # Examples
///
/// ```no_run
/// use quadro_tui::terminal;
///
/// terminal::install_panic_hook();
/// let mut terminal = terminal::setup_terminal(true).expect("failed to setup terminal");
/// ```
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        tracing::error!(panic = %panic_info, "application panicked");
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}
