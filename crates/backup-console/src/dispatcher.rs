//! Dispatcher
//!
//! Handle onto the background worker's action channel. Whatever goes through
//! it runs the whole middleware chain again, so backend tasks report their
//! results, status messages and follow-up events the same way keys do.

use crate::actions::{Action, Event};
use crate::state::StatusMessage;
use std::sync::mpsc::Sender;

#[derive(Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Send an action; a closed channel means the app is shutting down
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::warn!("Dispatcher: worker gone, dropping {:?}", e.0);
        }
    }

    /// Show a status message
    pub fn report(&self, message: StatusMessage) {
        self.dispatch(Action::Status(message));
    }

    /// Broadcast a fact to the middleware chain
    pub fn event(&self, event: Event) {
        self.dispatch(Action::event(event));
    }
}
