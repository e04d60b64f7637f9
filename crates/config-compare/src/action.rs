//! Compare session actions
//!
//! Tagged actions the compare session can process. The application maps key
//! events and backend results to these and dispatches them to
//! [`CompareSessionController::handle_action`](crate::CompareSessionController::handle_action).

use crate::model::{Classification, ConfigSnapshot, Panel};
use crate::state::FetchTicket;
use crate::traits::SnapshotError;

/// Actions understood by the compare session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompareAction {
    // === Selection ===
    /// Choose the source (left) snapshot of a device
    SelectSource { device_name: String, path: String },
    /// Choose the target (right) snapshot
    SelectTarget { path: String },
    /// Fetch both snapshots and open the comparison
    Confirm,
    /// Both fetches finished
    Loaded {
        ticket: FetchTicket,
        source: Box<Result<ConfigSnapshot, SnapshotError>>,
        target: Box<Result<ConfigSnapshot, SnapshotError>>,
    },

    // === Filters ===
    /// Show or hide one classification
    ToggleFilter(Classification),

    // === Search ===
    /// Focus the search input
    StartSearch,
    /// Leave the search input without searching
    CancelSearch,
    /// Insert a character into the search input
    SearchInsertChar(char),
    /// Delete character before cursor in the search input
    SearchBackspace,
    /// Delete character at cursor in the search input
    SearchDelete,
    /// Move cursor left in the search input
    SearchCursorLeft,
    /// Move cursor right in the search input
    SearchCursorRight,
    /// Move the search cursor to the start
    SearchCursorHome,
    /// Move the search cursor to the end
    SearchCursorEnd,
    /// Clear the search input
    SearchClear,
    /// Search for the typed term
    SubmitSearch,

    // === Scrolling ===
    /// Scroll the focused panel down one line
    ScrollDown,
    /// Scroll the focused panel up one line
    ScrollUp,
    /// Scroll the focused panel down one page
    ScrollPageDown,
    /// Scroll the focused panel up one page
    ScrollPageUp,
    /// Scroll to the first line
    ScrollTop,
    /// Scroll to the last line
    ScrollBottom,
    /// A panel reported its own scroll position (mouse wheel, scrollbar)
    ScrollPanel { panel: Panel, offset: usize },
    /// Move focus to the other panel
    SwitchPanel,

    // === General ===
    /// Once per event loop iteration
    Tick,
    /// Close the comparison
    Close,

    // === Viewport ===
    /// Set the panel height (for scroll calculations)
    SetViewport { height: u16 },
}

impl CompareAction {
    /// Check if this action edits the search input
    pub fn is_search_action(&self) -> bool {
        matches!(
            self,
            CompareAction::SearchInsertChar(_)
                | CompareAction::SearchBackspace
                | CompareAction::SearchDelete
                | CompareAction::SearchCursorLeft
                | CompareAction::SearchCursorRight
                | CompareAction::SearchCursorHome
                | CompareAction::SearchCursorEnd
                | CompareAction::SearchClear
                | CompareAction::SubmitSearch
                | CompareAction::CancelSearch
        )
    }

    /// Check if this action is a scroll action
    pub fn is_scroll(&self) -> bool {
        matches!(
            self,
            CompareAction::ScrollDown
                | CompareAction::ScrollUp
                | CompareAction::ScrollPageDown
                | CompareAction::ScrollPageUp
                | CompareAction::ScrollTop
                | CompareAction::ScrollBottom
                | CompareAction::ScrollPanel { .. }
        )
    }
}
