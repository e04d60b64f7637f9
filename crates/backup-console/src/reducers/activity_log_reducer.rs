//! Activity Log Reducer
//!
//! Screen switching for `Open`/`Close` happens in the app reducer.

use crate::actions::ActivityLogAction;
use crate::state::ActivityLogState;

pub fn reduce_activity_log(mut state: ActivityLogState, action: &ActivityLogAction) -> ActivityLogState {
    match action {
        ActivityLogAction::Loaded(lines) => {
            state.lines = lines.clone();
            state.loading = false;
            state.to_top();
        }
        ActivityLogAction::LoadFailed(error) => {
            state.loading = false;
            state.error = Some(error.clone());
        }

        ActivityLogAction::ScrollDown => state.scroll_by(1),
        ActivityLogAction::ScrollUp => state.scroll_by(-1),
        ActivityLogAction::PageDown => {
            let page = state.page();
            state.scroll_by(page);
        }
        ActivityLogAction::PageUp => {
            let page = state.page();
            state.scroll_by(-page);
        }
        ActivityLogAction::ScrollTop => state.to_top(),
        ActivityLogAction::ScrollBottom => state.to_bottom(),

        ActivityLogAction::Open | ActivityLogAction::Close => {}
    }
    state
}
