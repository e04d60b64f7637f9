use anyhow::{Context, Result};
use backup_client::{BackupClient, HttpBackupClient};
use backup_console_config::AppConfig;
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event as TermEvent, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::{Arc, RwLock};
use std::time::Duration;

mod actions;
mod background;
mod dispatcher;
mod keymap;
mod logger;
mod middleware;
mod reducers;
mod snapshot_source;
mod state;
mod theme;
mod view_models;
mod views;

use actions::{Action, Event, GlobalAction};
use background::{spawn_background_worker, SharedState};
use middleware::{
    backend_middleware::{BackendMiddleware, Credentials},
    compare_status_middleware::CompareStatusMiddleware,
    keyboard_middleware::KeyboardMiddleware,
    logging::LoggingMiddleware,
    Middleware,
};
use reducers::app_reducer::reduce;
use state::AppState;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    let log_path = logger::init()?;
    log::info!("Starting backup-console, logging to {}", log_path.display());

    let config = AppConfig::load();
    log::debug!("Configuration: {:?}", config);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start the async runtime")?;

    let client: Arc<dyn BackupClient> = Arc::new(HttpBackupClient::new(
        &config.backend_url,
        config.request_timeout(),
        config.accept_invalid_certs,
    )?);

    let credentials = config.has_credentials().then(|| Credentials {
        username: config.username.clone(),
        password: config.password.clone(),
    });
    let middleware: Vec<Box<dyn Middleware>> = vec![
        Box::new(LoggingMiddleware::new()),
        Box::new(KeyboardMiddleware::new()),
        Box::new(CompareStatusMiddleware::new()),
        Box::new(BackendMiddleware::new(
            client,
            runtime.handle().clone(),
            credentials,
        )),
    ];

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, middleware);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    runtime.shutdown_background();

    if let Err(err) = &result {
        log::error!("backup-console failed: {:#}", err);
    }
    log::info!("Exiting backup-console");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    middleware: Vec<Box<dyn Middleware>>,
) -> Result<()> {
    let (action_tx, action_rx) = mpsc::channel();
    let (result_tx, result_rx) = mpsc::channel();

    let mut state = AppState::default();
    let shared: SharedState = Arc::new(RwLock::new(state.clone()));
    let worker = spawn_background_worker(
        action_rx,
        action_tx.clone(),
        result_tx,
        Arc::clone(&shared),
        middleware,
    );

    send(&action_tx, Action::event(Event::Started))?;

    loop {
        terminal.draw(|frame| {
            let area = frame.area();
            views::render(&mut state, area, frame);
        })?;

        if !state.running {
            break;
        }

        let (next, changed) = apply_results(state, &result_rx)?;
        state = next;
        if !state.running {
            continue;
        }

        // Comparison events go back through the middleware
        for event in state.take_outbox() {
            send(&action_tx, Action::event(event))?;
        }

        if changed {
            match shared.write() {
                Ok(mut guard) => *guard = state.clone(),
                Err(e) => log::error!("Failed to publish state: {}", e),
            }
        }

        if event::poll(POLL_INTERVAL)? {
            if let TermEvent::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    send(&action_tx, Action::Global(GlobalAction::KeyPressed(key)))?;
                }
            }
        }

        state = reduce(state, &Action::Global(GlobalAction::Tick));
    }

    // The worker may already be gone after forwarding Quit
    let _ = action_tx.send(Action::Global(GlobalAction::Quit));
    if worker.join().is_err() {
        log::error!("Background worker panicked");
    }
    Ok(())
}

/// Reduce everything the worker forwarded since the last frame.
fn apply_results(mut state: AppState, result_rx: &Receiver<Action>) -> Result<(AppState, bool)> {
    let mut changed = false;
    loop {
        match result_rx.try_recv() {
            Ok(action) => {
                state = reduce(state, &action);
                changed = true;
            }
            Err(TryRecvError::Empty) => return Ok((state, changed)),
            // The worker exits right after forwarding Quit
            Err(TryRecvError::Disconnected) if !state.running => return Ok((state, changed)),
            Err(TryRecvError::Disconnected) => {
                anyhow::bail!("Background worker stopped unexpectedly")
            }
        }
    }
}

fn send(action_tx: &Sender<Action>, action: Action) -> Result<()> {
    action_tx
        .send(action)
        .map_err(|_| anyhow::anyhow!("Background worker is not running"))
}
