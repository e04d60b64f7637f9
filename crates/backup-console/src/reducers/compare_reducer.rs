//! Compare Reducer
//!
//! Forwards actions to the comparison session and turns the events it emits
//! into screen changes. The events themselves go to the outbox so
//! middleware can fetch snapshots and report status.

use crate::actions::Event;
use crate::state::{AppState, Screen};
use config_compare::{CompareAction, CompareEvent};

pub fn reduce_compare(mut state: AppState, action: &CompareAction) -> AppState {
    let events = state.compare.handle_action(action.clone());

    for event in events {
        match &event {
            CompareEvent::Opened { .. } => state.screen = Screen::Compare,
            CompareEvent::Closed if state.screen == Screen::Compare => {
                state.screen = Screen::Backups
            }
            _ => {}
        }
        state.outbox.push(Event::Compare(event));
    }

    state
}
