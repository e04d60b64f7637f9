//! Events emitted by the compare session for the application to handle.

use crate::model::Classification;
use crate::state::{FetchRequest, Selection};
use crate::stats::CompareStats;

/// Events emitted by [`CompareSessionController::handle_action`].
///
/// The session never performs I/O. When it needs snapshot content it emits
/// [`CompareEvent::FetchSnapshots`] and waits for a
/// [`CompareAction::Loaded`](crate::CompareAction::Loaded) with the results.
///
/// [`CompareSessionController::handle_action`]: crate::CompareSessionController::handle_action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompareEvent {
    /// Both snapshots must be fetched, concurrently, and reported back
    /// together with the request's ticket.
    FetchSnapshots(FetchRequest),

    /// The comparison view opened.
    Opened {
        /// Device and snapshot paths being compared.
        selection: Selection,
        /// Counts with the default filter.
        stats: CompareStats,
    },

    /// A classification filter was toggled.
    FilterChanged {
        classification: Classification,
        /// Whether lines of `classification` are now shown.
        visible: bool,
        /// Recounted statistics.
        stats: CompareStats,
    },

    /// A search ran, either submitted or re-run after a filter change.
    SearchCompleted {
        term: String,
        /// Number of matching lines over both panels.
        match_count: usize,
    },

    /// Something failed; the message is meant for the status bar.
    Error(String),

    /// The comparison closed and its state was discarded.
    Closed,
}
