//! Background worker thread that processes actions through middleware
//!
//! - Main thread handles rendering, user input and reducers
//! - Background thread runs the middleware chain, which starts backend I/O
//! - Communication happens via channels
//!
//! Actions dispatched by middleware via Dispatcher re-enter the middleware
//! chain, enabling flows like `Event::LoggedIn -> DeviceListAction::Load`.

use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use std::sync::mpsc::{Receiver, RecvError, Sender};
use std::sync::{Arc, RwLock};
use std::thread;

/// Shared state that background can read (main thread writes via reducer)
pub type SharedState = Arc<RwLock<AppState>>;

/// Spawn the background worker thread
///
/// - `action_rx`: receives actions from main thread and from Dispatcher (re-entry)
/// - `action_tx`: used to create Dispatcher for middleware to dispatch actions that re-enter
/// - `result_tx`: sends actions to main thread for reducers (non-consumed actions)
/// - `state`: shared state for middleware to read
/// - `middleware`: the middleware chain
pub fn spawn_background_worker(
    action_rx: Receiver<Action>,
    action_tx: Sender<Action>,
    result_tx: Sender<Action>,
    state: SharedState,
    middleware: Vec<Box<dyn Middleware>>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        background_loop(action_rx, action_tx, result_tx, state, middleware);
    })
}

fn background_loop(
    action_rx: Receiver<Action>,
    action_tx: Sender<Action>,
    result_tx: Sender<Action>,
    state: SharedState,
    mut middleware: Vec<Box<dyn Middleware>>,
) {
    log::info!("Background worker started");

    let dispatcher = Dispatcher::new(action_tx);

    loop {
        let action = match action_rx.recv() {
            Ok(action) => action,
            Err(RecvError) => {
                log::info!("Action channel disconnected, shutting down");
                break;
            }
        };

        if matches!(action, Action::Global(GlobalAction::Quit)) {
            log::info!("Background worker received shutdown signal");
            if result_tx.send(action).is_err() {
                log::error!("Failed to send quit action to main thread");
            }
            break;
        }

        let current_state = match state.read() {
            Ok(s) => s.clone(),
            Err(e) => {
                log::error!("Failed to read shared state: {}", e);
                continue;
            }
        };

        if !run_chain(&mut middleware, &action, &current_state, &dispatcher) {
            continue;
        }

        // Events are only for middleware observation
        if !matches!(action, Action::Event(_)) && result_tx.send(action).is_err() {
            log::error!("Result channel disconnected, shutting down");
            break;
        }
    }

    log::info!("Background worker stopped");
}

/// Run `action` through the chain. Returns whether it should reach the reducer.
fn run_chain(
    middleware: &mut [Box<dyn Middleware>],
    action: &Action,
    state: &AppState,
    dispatcher: &Dispatcher,
) -> bool {
    for mw in middleware.iter_mut() {
        if !mw.handle(action, state, dispatcher) {
            return false;
        }
    }
    true
}
