//! Compare Status Middleware
//!
//! Reports what the comparison session did in the status bar.

use crate::actions::{Action, Event};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{AppState, StatusMessage};
use config_compare::{filename_from_path, CompareEvent};

const SOURCE: &str = "compare";

#[derive(Default)]
pub struct CompareStatusMiddleware;

impl CompareStatusMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for CompareStatusMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        if let Action::Event(Event::Compare(event)) = action {
            if let Some(status) = status_for(event) {
                dispatcher.report(status);
            }
        }
        true
    }
}

/// Status message for a comparison event
fn status_for(event: &CompareEvent) -> Option<StatusMessage> {
    let status = match event {
        CompareEvent::FetchSnapshots(request) => StatusMessage::running(
            format!(
                "Loading {} and {}",
                filename_from_path(&request.source_path),
                filename_from_path(&request.target_path)
            ),
            SOURCE,
        ),
        CompareEvent::Opened { selection, stats } => StatusMessage::success(
            format!(
                "{}: {} vs {} (+{} -{})",
                selection.device_name,
                filename_from_path(&selection.source_path),
                filename_from_path(&selection.target_path),
                stats.added,
                stats.removed
            ),
            SOURCE,
        ),
        CompareEvent::FilterChanged {
            classification,
            visible,
            stats,
        } => StatusMessage::info(
            format!(
                "{} lines {} ({} lines shown)",
                classification.label(),
                if *visible { "shown" } else { "hidden" },
                stats.total
            ),
            SOURCE,
        ),
        CompareEvent::SearchCompleted { term, match_count } => {
            if term.is_empty() {
                StatusMessage::info("Search cleared", SOURCE)
            } else if *match_count == 0 {
                StatusMessage::info(format!("No lines match '{}'", term), SOURCE)
            } else {
                StatusMessage::info(
                    format!("{} lines match '{}'", match_count, term),
                    SOURCE,
                )
            }
        }
        CompareEvent::Error(message) => StatusMessage::error(message.clone(), SOURCE),
        CompareEvent::Closed => return None,
    };
    // Opening or failing settles the loading message
    Some(status.for_operation(SOURCE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use config_compare::{Classification, CompareStats, Selection};
    use pretty_assertions::assert_eq;
    use std::sync::mpsc;

    fn message(status: Option<StatusMessage>) -> Option<String> {
        status.map(|s| s.message)
    }

    #[test]
    fn test_opened_summarizes_selection() {
        let event = CompareEvent::Opened {
            selection: Selection {
                device_name: "core-sw1".into(),
                source_path: "backups/core-sw1/old.txt".into(),
                target_path: "backups/core-sw1/new.txt".into(),
            },
            stats: CompareStats {
                total: 6,
                added: 1,
                removed: 1,
                changed: 0,
                unchanged: 4,
            },
        };
        assert_eq!(
            message(status_for(&event)).as_deref(),
            Some("core-sw1: old.txt vs new.txt (+1 -1)")
        );
    }

    #[test]
    fn test_filter_and_search_messages() {
        let filter = CompareEvent::FilterChanged {
            classification: Classification::Removed,
            visible: false,
            stats: CompareStats {
                total: 5,
                ..CompareStats::default()
            },
        };
        assert_eq!(
            message(status_for(&filter)).as_deref(),
            Some("removed lines hidden (5 lines shown)")
        );

        let search = CompareEvent::SearchCompleted {
            term: "vlan".into(),
            match_count: 0,
        };
        assert_eq!(
            message(status_for(&search)).as_deref(),
            Some("No lines match 'vlan'")
        );
        assert_eq!(status_for(&CompareEvent::Closed).is_none(), true);
    }

    #[test]
    fn test_dispatches_status_and_continues_chain() {
        let (tx, rx) = mpsc::channel();
        let dispatcher = Dispatcher::new(tx);
        let mut middleware = CompareStatusMiddleware::new();

        let forwarded = middleware.handle(
            &Action::event(Event::Compare(CompareEvent::Error("Not logged in".into()))),
            &AppState::default(),
            &dispatcher,
        );
        assert!(forwarded);
        match rx.try_recv() {
            Ok(Action::Status(status)) => {
                assert_eq!(status.message, "Not logged in");
                assert_eq!(status.operation.as_deref(), Some("compare"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
