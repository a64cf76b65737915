// TUI event loop and terminal management
use crate::app::{App, AppEvent, Command};
use crate::input::handle_key;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use spacebio_core::{check_api_status, SearchBackend};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{unbounded_channel, UnboundedSender};
use tracing::{debug, info, warn};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub async fn run_tui(
    mut app: App,
    backend: Arc<dyn SearchBackend>,
    mouse_enabled: bool,
) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = event_loop(&mut terminal, &mut app, backend).await;

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    if mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    terminal.show_cursor()?;

    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    backend: Arc<dyn SearchBackend>,
) -> anyhow::Result<()> {
    let (tx, mut rx) = unbounded_channel::<AppEvent>();
    info!("TUI started at {}", app.navigator.current_path());

    loop {
        // Commands queued during construction or the last key press
        for command in app.drain_commands() {
            execute_command(app, command, &backend, &tx);
        }

        while let Ok(event) = rx.try_recv() {
            app.handle_event(event);
        }

        terminal.draw(|f| crate::ui::render(f, app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(app, key);
                }
            }
        } else {
            // Let spawned requests make progress between polls
            tokio::task::yield_now().await;
        }

        if app.should_quit {
            info!("TUI exiting");
            break;
        }
    }

    Ok(())
}

fn execute_command(
    app: &mut App,
    command: Command,
    backend: &Arc<dyn SearchBackend>,
    tx: &UnboundedSender<AppEvent>,
) {
    match command {
        Command::Search { ticket, query } => {
            debug!("Dispatching search #{} for {:?}", ticket, query.text());
            let backend = Arc::clone(backend);
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = backend.search(&query).await;
                // Receiver gone means the TUI already exited
                let _ = tx.send(AppEvent::SearchFinished { ticket, result });
            });
        }
        Command::CheckHealth { ticket } => {
            let backend = Arc::clone(backend);
            let tx = tx.clone();
            tokio::spawn(async move {
                let status = check_api_status(backend.as_ref()).await;
                let _ = tx.send(AppEvent::HealthChecked { ticket, status });
            });
        }
        Command::OpenUrl(url) => {
            if let Err(e) = open::that(&url) {
                warn!("Failed to open {}: {}", url, e);
                app.status_message = Some(format!("Failed to open browser: {}", e));
            }
        }
    }
}
