//! corkboard - a Kanban task board for the terminal.
//!
//! This is the main binary that launches the TUI application.

use corkboard_core::demo_board;
use corkboard_tui::{App, terminal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();

    // Setup terminal
    let mut terminal = terminal::setup_terminal()?;

    // Seed the board with the demo tasks
    let mut app = App::new(demo_board());

    // Run the main loop
    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    result
}
