mod config;
mod controller;
mod logging;
mod model;
mod view;

use std::io;
use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use view::AppView;
use config::{ClientConfig, INPUT_POLL_INTERVAL};
use controller::BrowseController;
use model::{CatalogClient, CatalogSource, UiState};

#[tokio::main]
async fn main() -> Result<()> {
    // Flushes the log file when main returns
    let _log_guard = match logging::init_logging() {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: Failed to initialize logging: {}", e);
            None
        }
    };

    tracing::info!("=== Book Explorer Starting ===");

    let client_config = ClientConfig::from_env();
    tracing::info!(base_url = %client_config.base_url, "Using catalog endpoint");
    let catalog = CatalogClient::new(&client_config)?;

    tracing::info!("Starting TUI...");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Kicks off the first popular page
    let mut controller = BrowseController::new(catalog);

    let res = run_app(&mut terminal, &mut controller).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("Book Explorer shutting down");
    Ok(())
}

async fn run_app<C: CatalogSource>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    controller: &mut BrowseController<C>,
) -> io::Result<()> {
    let mut ui_state = UiState::default();

    loop {
        // Apply whatever fetches finished since the last frame
        controller.poll_completions();

        let state = controller.snapshot();
        terminal.draw(|f| {
            AppView::render(f, &state, &ui_state);
        })?;

        if event::poll(INPUT_POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                controller.handle_key_event(&mut ui_state, key);
            }
        }

        if ui_state.should_quit {
            break;
        }

        // Let fetch tasks make progress between frames
        tokio::task::yield_now().await;
    }

    Ok(())
}
