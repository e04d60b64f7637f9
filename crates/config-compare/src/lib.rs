//! # config-compare
//!
//! Side-by-side comparison of network device configuration snapshots.
//!
//! Two configuration texts are diffed line by line, rendered into a left
//! (source) and right (target) panel, and can then be filtered by line
//! classification and searched without diffing again. Counts always reflect
//! what is visible, and the two panels scroll together.
//!
//! ## Action-Based Architecture
//!
//! The session never performs I/O. The application maps key events and
//! backend results to [`CompareAction`]s, dispatches them to
//! [`CompareSessionController::handle_action`] and reacts to the returned
//! [`CompareEvent`]s, most importantly [`CompareEvent::FetchSnapshots`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use config_compare::{CompareAction, CompareEvent, CompareSessionController};
//!
//! let mut session = CompareSessionController::new();
//! session.handle_action(CompareAction::SelectSource {
//!     device_name: "core-sw1".into(),
//!     path: "backups/core-sw1/core-sw1_20240101.txt".into(),
//! });
//! session.handle_action(CompareAction::SelectTarget {
//!     path: "backups/core-sw1/core-sw1_20240201.txt".into(),
//! });
//!
//! for event in session.handle_action(CompareAction::Confirm) {
//!     if let CompareEvent::FetchSnapshots(request) = event {
//!         // Fetch both paths, then dispatch CompareAction::Loaded.
//!     }
//! }
//! ```
//!
//! With a [`SnapshotSource`] at hand the whole fetch can be awaited directly
//! through [`CompareSessionController::open_with`].

pub mod action;
pub mod differ;
pub mod event;
pub mod filter;
pub mod model;
pub mod render;
pub mod search;
pub mod state;
pub mod stats;
pub mod traits;
pub mod widget;

// Re-export commonly used types
pub use action::CompareAction;
pub use differ::{diff_lines, split_lines};
pub use event::CompareEvent;
pub use filter::FilterState;
pub use model::{
    filename_from_path, Classification, ConfigSnapshot, DiffOp, Panel, RenderedLine,
    RenderedPanels, SnapshotContent, NOT_FOUND_PLACEHOLDER,
};
pub use render::render;
pub use search::{SearchMatch, SearchOutcome, SearchState};
pub use state::{
    CompareSessionController, Comparison, Completion, FetchRequest, FetchTicket,
    ScrollCoordinator, Selection, SessionError, SessionPhase,
};
pub use stats::{aggregate, CompareStats};
pub use traits::{DefaultTheme, SnapshotError, SnapshotSource, ThemeProvider};
pub use widget::{hint_line, CompareView, FooterHint};
