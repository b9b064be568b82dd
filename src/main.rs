//! quadro - A terminal Kanban board.
//!
//! This is the main binary that launches the TUI application.

mod logging;

use quadro_config::Config;
use quadro_tui::{App, terminal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    // Logging is optional: warn before the TUI takes over the screen.
    match logging::init(&config.log) {
        Ok(path) => tracing::info!(log_file = %path.display(), "quadro starting"),
        Err(e) => eprintln!("Warning: logging disabled: {e:#}"),
    }

    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();

    let mut terminal = terminal::setup_terminal(config.ui.mouse)?;

    let mut app = App::with_config(&config);
    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "quadro exited with an error");
    } else {
        tracing::info!("quadro exiting");
    }
    result
}
