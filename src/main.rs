use anyhow::Result;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{DisableMouseCapture, EnableMouseCapture},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io::stdout;

use penmate::{logging, App};

#[tokio::main]
async fn main() -> Result<()> {
    let user_dir = App::default_user_dir();
    if let Err(e) = logging::init(&user_dir) {
        eprintln!("Warning: logging disabled: {:#}", e);
    }
    tracing::info!("starting penmate {}", env!("CARGO_PKG_VERSION"));

    let mut app = App::new().await;

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal).await;

    // Restore the terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        ratatui::crossterm::cursor::Show
    )?;

    if let Err(e) = &result {
        tracing::error!("exiting with error: {:#}", e);
        eprintln!("Error: {:#}", e);
    }
    result
}
