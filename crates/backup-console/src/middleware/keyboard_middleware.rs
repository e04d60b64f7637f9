//! KeyboardMiddleware - translates key presses into screen actions
//!
//! Raw `GlobalAction::KeyPressed` never reaches the reducer. The translated
//! action re-enters the chain so every middleware sees it.

use crate::actions::{Action, GlobalAction};
use crate::dispatcher::Dispatcher;
use crate::keymap;
use crate::middleware::Middleware;
use crate::state::AppState;

#[derive(Default)]
pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        let Action::Global(GlobalAction::KeyPressed(key)) = action else {
            return true;
        };

        match keymap::translate(*key, state) {
            Some(translated) => dispatcher.dispatch(translated),
            None => log::trace!("Unbound key {:?} on {:?}", key.code, state.screen),
        }
        false
    }
}
