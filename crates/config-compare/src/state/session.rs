//! Compare session state machine.

use thiserror::Error;

use crate::action::CompareAction;
use crate::event::CompareEvent;
use crate::model::{Classification, ConfigSnapshot};
use crate::search::SearchOutcome;
use crate::traits::{SnapshotError, SnapshotSource};

use super::comparison::Comparison;

/// The two snapshots chosen for a comparison and the device they belong to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub device_name: String,
    pub source_path: String,
    pub target_path: String,
}

/// Identity of one confirmed fetch. Results carrying an older ticket are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Both snapshots to fetch for a confirmed selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub ticket: FetchTicket,
    pub source_path: String,
    pub target_path: String,
}

/// Where the session currently is.
#[derive(Debug, Clone)]
pub enum SessionPhase {
    /// Nothing chosen.
    Idle,
    /// The left (source) snapshot is chosen.
    SourceSelected {
        device_name: String,
        source_path: String,
    },
    /// Both snapshots are chosen. `pending` is set while their content loads.
    BothSelected {
        selection: Selection,
        pending: Option<FetchTicket>,
    },
    /// The comparison view is open.
    ComparisonOpen(Box<Comparison>),
}

impl SessionPhase {
    /// Short name used in logs and errors.
    pub fn name(&self) -> &'static str {
        match self {
            SessionPhase::Idle => "idle",
            SessionPhase::SourceSelected { .. } => "source selected",
            SessionPhase::BothSelected { pending: None, .. } => "both selected",
            SessionPhase::BothSelected {
                pending: Some(_), ..
            } => "loading",
            SessionPhase::ComparisonOpen(_) => "comparison open",
        }
    }
}

/// Outcome of delivering fetch results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The comparison view is now open.
    Opened,
    /// The results belonged to a superseded selection and were dropped.
    Discarded,
}

/// Errors returned by the session controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The action is not valid in the current phase. State is unchanged.
    #[error("Cannot {action} while {phase}")]
    InvalidTransition {
        action: &'static str,
        phase: &'static str,
    },

    /// Fetching a snapshot failed. The session is back at both-selected.
    #[error("Failed to load configuration: {0}")]
    Fetch(#[from] SnapshotError),
}

/// Owns the compare session: the selection, the pending fetch and, once
/// open, the whole derived comparison state.
#[derive(Debug, Clone)]
pub struct CompareSessionController {
    phase: SessionPhase,
    next_ticket: u64,
    viewport_height: usize,
}

impl Default for CompareSessionController {
    fn default() -> Self {
        Self::new()
    }
}

impl CompareSessionController {
    pub fn new() -> Self {
        Self {
            phase: SessionPhase::Idle,
            next_ticket: 1,
            viewport_height: 0,
        }
    }

    pub fn phase(&self) -> &SessionPhase {
        &self.phase
    }

    pub fn is_open(&self) -> bool {
        matches!(self.phase, SessionPhase::ComparisonOpen(_))
    }

    pub fn is_loading(&self) -> bool {
        matches!(
            self.phase,
            SessionPhase::BothSelected {
                pending: Some(_),
                ..
            }
        )
    }

    /// The open comparison, if any.
    pub fn comparison(&self) -> Option<&Comparison> {
        match &self.phase {
            SessionPhase::ComparisonOpen(cmp) => Some(cmp),
            _ => None,
        }
    }

    pub fn comparison_mut(&mut self) -> Option<&mut Comparison> {
        match &mut self.phase {
            SessionPhase::ComparisonOpen(cmp) => Some(cmp),
            _ => None,
        }
    }

    /// Current selection once both snapshots are chosen.
    pub fn selection(&self) -> Option<&Selection> {
        match &self.phase {
            SessionPhase::BothSelected { selection, .. } => Some(selection),
            SessionPhase::ComparisonOpen(cmp) => Some(&cmp.selection),
            _ => None,
        }
    }

    /// Path chosen as the source, in any phase that has one.
    pub fn source_path(&self) -> Option<&str> {
        match &self.phase {
            SessionPhase::SourceSelected { source_path, .. } => Some(source_path),
            _ => self.selection().map(|s| s.source_path.as_str()),
        }
    }

    /// Choose the source snapshot. Valid in every phase: an open comparison
    /// is torn down and any pending fetch becomes stale.
    pub fn select_source(&mut self, device_name: impl Into<String>, path: impl Into<String>) {
        if self.is_open() {
            log::debug!("Closing open comparison for new selection");
        }
        self.phase = SessionPhase::SourceSelected {
            device_name: device_name.into(),
            source_path: path.into(),
        };
    }

    /// Choose (or replace) the target snapshot.
    pub fn select_target(&mut self, path: impl Into<String>) -> Result<(), SessionError> {
        let target_path = path.into();
        let selection = match &self.phase {
            SessionPhase::SourceSelected {
                device_name,
                source_path,
            } => Selection {
                device_name: device_name.clone(),
                source_path: source_path.clone(),
                target_path,
            },
            SessionPhase::BothSelected { selection, .. } => Selection {
                target_path,
                ..selection.clone()
            },
            other => return Err(Self::invalid_phase("select target", other)),
        };
        self.phase = SessionPhase::BothSelected {
            selection,
            pending: None,
        };
        Ok(())
    }

    /// Start loading both snapshots. The caller fetches them and reports
    /// back through [`complete`](Self::complete) with the returned ticket.
    pub fn confirm(&mut self) -> Result<FetchRequest, SessionError> {
        match &mut self.phase {
            SessionPhase::BothSelected { selection, pending } if pending.is_none() => {
                let ticket = FetchTicket(self.next_ticket);
                self.next_ticket += 1;
                *pending = Some(ticket);

                log::debug!(
                    "Fetching {} and {} (ticket {})",
                    selection.source_path,
                    selection.target_path,
                    ticket.0
                );
                Ok(FetchRequest {
                    ticket,
                    source_path: selection.source_path.clone(),
                    target_path: selection.target_path.clone(),
                })
            }
            other => Err(Self::invalid_phase("confirm", other)),
        }
    }

    /// Deliver both fetch results.
    ///
    /// Results for a ticket that is no longer pending are discarded. If either
    /// fetch failed nothing is rendered and the session stays at
    /// both-selected, ready to confirm again.
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        source: Result<ConfigSnapshot, SnapshotError>,
        target: Result<ConfigSnapshot, SnapshotError>,
    ) -> Result<Completion, SessionError> {
        let SessionPhase::BothSelected { selection, pending } = &mut self.phase else {
            log::debug!("Discarding results for ticket {}: no fetch pending", ticket.0);
            return Ok(Completion::Discarded);
        };
        if *pending != Some(ticket) {
            log::debug!("Discarding stale results for ticket {}", ticket.0);
            return Ok(Completion::Discarded);
        }
        *pending = None;

        let (source, target) = match (source, target) {
            (Ok(source), Ok(target)) => (source, target),
            (Err(e), _) | (_, Err(e)) => {
                log::warn!("Comparison aborted: {}", e);
                return Err(SessionError::Fetch(e));
            }
        };

        let comparison =
            Comparison::build(selection.clone(), source, target, self.viewport_height);
        self.phase = SessionPhase::ComparisonOpen(Box::new(comparison));
        Ok(Completion::Opened)
    }

    /// Confirm, fetch both snapshots concurrently and complete.
    pub async fn open_with<S>(&mut self, source: &S) -> Result<Completion, SessionError>
    where
        S: SnapshotSource + ?Sized,
    {
        let request = self.confirm()?;
        let (left, right) = futures::join!(
            source.fetch_snapshot(&request.source_path),
            source.fetch_snapshot(&request.target_path)
        );
        self.complete(request.ticket, left, right)
    }

    /// Toggle a classification filter on the open comparison.
    pub fn toggle_filter(&mut self, classification: Classification) -> Result<bool, SessionError> {
        match &mut self.phase {
            SessionPhase::ComparisonOpen(cmp) => Ok(cmp.toggle_filter(classification)),
            other => Err(Self::invalid_phase("toggle filter", other)),
        }
    }

    /// Submit the drafted search term on the open comparison.
    pub fn submit_search(&mut self) -> Result<SearchOutcome, SessionError> {
        match &mut self.phase {
            SessionPhase::ComparisonOpen(cmp) => Ok(cmp.submit_search()),
            other => Err(Self::invalid_phase("search", other)),
        }
    }

    /// Return to idle, dropping the selection and all derived state.
    /// Returns whether a comparison was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        self.phase = SessionPhase::Idle;
        was_open
    }

    /// Remember the panel height and pass it to the open comparison.
    pub fn set_viewport_height(&mut self, height: usize) {
        self.viewport_height = height;
        if let Some(cmp) = self.comparison_mut() {
            cmp.set_viewport_height(height);
        }
    }

    /// Handle an action and return the events for the application.
    pub fn handle_action(&mut self, action: CompareAction) -> Vec<CompareEvent> {
        let mut events = Vec::new();

        match action {
            CompareAction::SelectSource { device_name, path } => {
                let was_open = self.is_open();
                self.select_source(device_name, path);
                if was_open {
                    events.push(CompareEvent::Closed);
                }
            }
            CompareAction::SelectTarget { path } => {
                if let Err(e) = self.select_target(path) {
                    events.push(CompareEvent::Error(e.to_string()));
                }
            }
            CompareAction::Confirm => match self.confirm() {
                Ok(request) => events.push(CompareEvent::FetchSnapshots(request)),
                Err(e) => events.push(CompareEvent::Error(e.to_string())),
            },
            CompareAction::Loaded {
                ticket,
                source,
                target,
            } => match self.complete(ticket, *source, *target) {
                Ok(Completion::Opened) => {
                    if let Some(cmp) = self.comparison() {
                        events.push(CompareEvent::Opened {
                            selection: cmp.selection.clone(),
                            stats: cmp.stats,
                        });
                    }
                }
                Ok(Completion::Discarded) => {}
                Err(e) => events.push(CompareEvent::Error(e.to_string())),
            },
            CompareAction::Close => {
                if self.close() {
                    events.push(CompareEvent::Closed);
                }
            }
            CompareAction::SetViewport { height } => {
                self.set_viewport_height(height as usize);
            }
            action => {
                if let Some(cmp) = self.comparison_mut() {
                    handle_open_action(cmp, action, &mut events);
                } else {
                    log::trace!("Ignoring {:?} while {}", action, self.phase.name());
                }
            }
        }

        events
    }

    fn invalid_phase(action: &'static str, phase: &SessionPhase) -> SessionError {
        SessionError::InvalidTransition {
            action,
            phase: phase.name(),
        }
    }
}

/// Actions handled in place while the comparison is open.
fn handle_open_action(cmp: &mut Comparison, action: CompareAction, events: &mut Vec<CompareEvent>) {
    let focused = cmp.focused;
    match action {
        CompareAction::ToggleFilter(classification) => {
            let visible = cmp.toggle_filter(classification);
            events.push(CompareEvent::FilterChanged {
                classification,
                visible,
                stats: cmp.stats,
            });
            if cmp.search.is_active() {
                events.push(CompareEvent::SearchCompleted {
                    term: cmp.search.term.clone(),
                    match_count: cmp.search.match_count,
                });
            }
        }
        CompareAction::StartSearch => cmp.search_editing = true,
        CompareAction::CancelSearch => cmp.search_editing = false,
        CompareAction::SearchInsertChar(c) => cmp.search_input.insert_char(c),
        CompareAction::SearchBackspace => cmp.search_input.delete_char_before(),
        CompareAction::SearchDelete => cmp.search_input.delete_char_at(),
        CompareAction::SearchCursorLeft => cmp.search_input.cursor_left(),
        CompareAction::SearchCursorRight => cmp.search_input.cursor_right(),
        CompareAction::SearchCursorHome => cmp.search_input.cursor_home(),
        CompareAction::SearchCursorEnd => cmp.search_input.cursor_end(),
        CompareAction::SearchClear => cmp.search_input.clear(),
        CompareAction::SubmitSearch => {
            let outcome = cmp.submit_search();
            events.push(CompareEvent::SearchCompleted {
                term: cmp.search.term.clone(),
                match_count: outcome.match_count,
            });
        }
        CompareAction::ScrollDown => {
            cmp.scroll.scroll_by(focused, 1);
        }
        CompareAction::ScrollUp => {
            cmp.scroll.scroll_by(focused, -1);
        }
        CompareAction::ScrollPageDown => {
            cmp.scroll.page_down(focused);
        }
        CompareAction::ScrollPageUp => {
            cmp.scroll.page_up(focused);
        }
        CompareAction::ScrollTop => {
            cmp.scroll.to_top(focused);
        }
        CompareAction::ScrollBottom => {
            cmp.scroll.to_bottom(focused);
        }
        CompareAction::ScrollPanel { panel, offset } => {
            cmp.scroll.on_scroll(panel, offset);
        }
        CompareAction::SwitchPanel => cmp.focused = focused.other(),
        CompareAction::Tick => cmp.scroll.tick(),
        CompareAction::SelectSource { .. }
        | CompareAction::SelectTarget { .. }
        | CompareAction::Confirm
        | CompareAction::Loaded { .. }
        | CompareAction::SetViewport { .. }
        | CompareAction::Close => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Panel;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory snapshot store. Paths missing from `files` are served as not
    /// found; paths listed in `broken` fail with a transport error.
    #[derive(Default)]
    struct MemorySource {
        files: HashMap<String, String>,
        broken: Vec<String>,
        requests: Mutex<Vec<String>>,
    }

    impl MemorySource {
        fn with(mut self, path: &str, content: &str) -> Self {
            self.files.insert(path.to_string(), content.to_string());
            self
        }

        fn broken(mut self, path: &str) -> Self {
            self.broken.push(path.to_string());
            self
        }
    }

    #[async_trait]
    impl SnapshotSource for MemorySource {
        async fn fetch_snapshot(&self, path: &str) -> Result<ConfigSnapshot, SnapshotError> {
            self.requests.lock().unwrap().push(path.to_string());
            if self.broken.iter().any(|p| p == path) {
                return Err(SnapshotError::Transport("connection refused".into()));
            }
            Ok(match self.files.get(path) {
                Some(text) => ConfigSnapshot::new(path, text.clone()),
                None => ConfigSnapshot::not_found(path, Some("File not found".into())),
            })
        }
    }

    fn snapshot(path: &str, text: &str) -> ConfigSnapshot {
        ConfigSnapshot::new(path, text)
    }

    fn both_selected() -> CompareSessionController {
        let mut session = CompareSessionController::new();
        session.select_source("core-sw1", "sw/a.txt");
        session.select_target("sw/b.txt").unwrap();
        session
    }

    #[test]
    fn test_selection_flow() {
        let mut session = CompareSessionController::new();
        assert_eq!(session.phase().name(), "idle");

        session.select_source("core-sw1", "sw/a.txt");
        assert_eq!(session.phase().name(), "source selected");
        assert_eq!(session.source_path(), Some("sw/a.txt"));

        session.select_target("sw/b.txt").unwrap();
        session.select_target("sw/c.txt").unwrap();
        assert_eq!(
            session.selection(),
            Some(&Selection {
                device_name: "core-sw1".into(),
                source_path: "sw/a.txt".into(),
                target_path: "sw/c.txt".into(),
            })
        );
    }

    #[test]
    fn test_invalid_transitions_leave_state() {
        let mut session = CompareSessionController::new();
        assert_eq!(
            session.select_target("sw/b.txt"),
            Err(SessionError::InvalidTransition {
                action: "select target",
                phase: "idle"
            })
        );
        assert!(matches!(
            session.confirm(),
            Err(SessionError::InvalidTransition { .. })
        ));
        assert!(session.toggle_filter(Classification::Added).is_err());
        assert_eq!(session.phase().name(), "idle");

        let mut session = both_selected();
        session.confirm().unwrap();
        assert_eq!(
            session.confirm(),
            Err(SessionError::InvalidTransition {
                action: "confirm",
                phase: "loading"
            })
        );
    }

    #[test]
    fn test_complete_opens_comparison() {
        let mut session = both_selected();
        let request = session.confirm().unwrap();
        assert_eq!(request.source_path, "sw/a.txt");
        assert_eq!(request.target_path, "sw/b.txt");
        assert!(session.is_loading());

        let result = session.complete(
            request.ticket,
            Ok(snapshot("sw/a.txt", "a\nb\nc")),
            Ok(snapshot("sw/b.txt", "a\nx\nc")),
        );
        assert_eq!(result, Ok(Completion::Opened));

        let cmp = session.comparison().unwrap();
        assert_eq!(cmp.selection.device_name, "core-sw1");
        assert_eq!(cmp.stats.added, 1);
        assert_eq!(cmp.stats.removed, 1);
    }

    #[test]
    fn test_fetch_failure_rolls_back() {
        let mut session = both_selected();
        let request = session.confirm().unwrap();

        let result = session.complete(
            request.ticket,
            Ok(snapshot("sw/a.txt", "a")),
            Err(SnapshotError::Transport("timeout".into())),
        );
        assert_eq!(
            result,
            Err(SessionError::Fetch(SnapshotError::Transport(
                "timeout".into()
            )))
        );
        assert!(!session.is_open());
        assert_eq!(session.phase().name(), "both selected");

        // Can retry straight away.
        assert!(session.confirm().is_ok());
    }

    #[test]
    fn test_stale_results_are_discarded() {
        let mut session = both_selected();
        let first = session.confirm().unwrap();

        // Operator picks another target while the first fetch is in flight.
        session.select_target("sw/c.txt").unwrap();
        let second = session.confirm().unwrap();
        assert_ne!(first.ticket, second.ticket);

        let late = session.complete(
            first.ticket,
            Ok(snapshot("sw/a.txt", "old")),
            Ok(snapshot("sw/b.txt", "old")),
        );
        assert_eq!(late, Ok(Completion::Discarded));
        assert!(session.is_loading());

        let fresh = session.complete(
            second.ticket,
            Ok(snapshot("sw/a.txt", "a")),
            Ok(snapshot("sw/c.txt", "c")),
        );
        assert_eq!(fresh, Ok(Completion::Opened));
        assert_eq!(session.comparison().unwrap().target.path, "sw/c.txt");
    }

    #[test]
    fn test_new_selection_tears_down_open_comparison() {
        let mut session = both_selected();
        let request = session.confirm().unwrap();
        session
            .complete(
                request.ticket,
                Ok(snapshot("sw/a.txt", "a")),
                Ok(snapshot("sw/b.txt", "b")),
            )
            .unwrap();
        session.toggle_filter(Classification::Added).unwrap();

        let events = session.handle_action(CompareAction::SelectSource {
            device_name: "edge-1".into(),
            path: "edge/a.txt".into(),
        });
        assert_eq!(events, vec![CompareEvent::Closed]);
        assert!(session.comparison().is_none());

        // A fresh comparison starts with default filters.
        session.select_target("edge/b.txt").unwrap();
        let request = session.confirm().unwrap();
        session
            .complete(
                request.ticket,
                Ok(snapshot("edge/a.txt", "a")),
                Ok(snapshot("edge/b.txt", "b")),
            )
            .unwrap();
        assert!(session.comparison().unwrap().filter.show_added);
    }

    #[test]
    fn test_close_discards_state() {
        let mut session = both_selected();
        let request = session.confirm().unwrap();
        session
            .complete(
                request.ticket,
                Ok(snapshot("sw/a.txt", "a")),
                Ok(snapshot("sw/b.txt", "b")),
            )
            .unwrap();

        assert_eq!(
            session.handle_action(CompareAction::Close),
            vec![CompareEvent::Closed]
        );
        assert_eq!(session.phase().name(), "idle");
        assert!(session.selection().is_none());
        assert!(session.handle_action(CompareAction::Close).is_empty());
    }

    #[tokio::test]
    async fn test_open_with_fetches_both() {
        let source = MemorySource::default()
            .with("sw/a.txt", "hostname sw\nvlan 10\nend\n")
            .with("sw/b.txt", "hostname sw\nvlan 20\nend\n");
        let mut session = both_selected();

        let result = session.open_with(&source).await;
        assert_eq!(result, Ok(Completion::Opened));

        let mut requested = source.requests.lock().unwrap().clone();
        requested.sort();
        assert_eq!(requested, vec!["sw/a.txt", "sw/b.txt"]);

        let cmp = session.comparison().unwrap();
        assert_eq!(cmp.panels.texts(Panel::Left), vec!["hostname sw", "vlan 10", "end"]);
        assert_eq!(cmp.panels.texts(Panel::Right), vec!["hostname sw", "vlan 20", "end"]);
    }

    #[tokio::test]
    async fn test_open_with_missing_snapshot_shows_placeholder() {
        let source = MemorySource::default().with("sw/a.txt", "hostname sw\n");
        let mut session = both_selected();

        assert_eq!(session.open_with(&source).await, Ok(Completion::Opened));
        let cmp = session.comparison().unwrap();
        assert!(!cmp.target.is_found());
        assert_eq!(cmp.panels.texts(Panel::Right), vec!["File not found!"]);
        assert_eq!(cmp.panels.texts(Panel::Left), vec!["hostname sw"]);
    }

    #[tokio::test]
    async fn test_open_with_transport_error() {
        let source = MemorySource::default()
            .with("sw/a.txt", "a")
            .broken("sw/b.txt");
        let mut session = both_selected();

        let result = session.open_with(&source as &dyn SnapshotSource).await;
        assert!(matches!(result, Err(SessionError::Fetch(_))));
        assert_eq!(session.phase().name(), "both selected");
    }

    #[test]
    fn test_handle_action_full_flow() {
        let mut session = CompareSessionController::new();
        session.handle_action(CompareAction::SetViewport { height: 10 });
        session.handle_action(CompareAction::SelectSource {
            device_name: "core-sw1".into(),
            path: "sw/a.txt".into(),
        });
        session.handle_action(CompareAction::SelectTarget {
            path: "sw/b.txt".into(),
        });

        let events = session.handle_action(CompareAction::Confirm);
        let request = match events.as_slice() {
            [CompareEvent::FetchSnapshots(request)] => request.clone(),
            other => panic!("unexpected events: {:?}", other),
        };

        let events = session.handle_action(CompareAction::Loaded {
            ticket: request.ticket,
            source: Box::new(Ok(snapshot("sw/a.txt", "a\nb\nc"))),
            target: Box::new(Ok(snapshot("sw/b.txt", "a\nx\nc"))),
        });
        assert!(matches!(events.as_slice(), [CompareEvent::Opened { .. }]));

        let events = session.handle_action(CompareAction::ToggleFilter(Classification::Removed));
        match events.as_slice() {
            [CompareEvent::FilterChanged {
                classification,
                visible,
                stats,
            }] => {
                assert_eq!(*classification, Classification::Removed);
                assert!(!visible);
                assert_eq!(stats.removed, 0);
                assert_eq!(stats.total, 5);
            }
            other => panic!("unexpected events: {:?}", other),
        }

        session.handle_action(CompareAction::StartSearch);
        session.handle_action(CompareAction::SearchInsertChar('C'));
        let events = session.handle_action(CompareAction::SubmitSearch);
        assert_eq!(
            events,
            vec![CompareEvent::SearchCompleted {
                term: "C".into(),
                match_count: 2
            }]
        );
        assert!(!session.comparison().unwrap().search_editing);
    }

    #[test]
    fn test_scroll_actions_follow_focus() {
        let text: String = (0..50).map(|i| format!("l{}\n", i)).collect();
        let mut session = both_selected();
        session.set_viewport_height(10);
        let request = session.confirm().unwrap();
        session
            .complete(
                request.ticket,
                Ok(snapshot("sw/a.txt", &text)),
                Ok(snapshot("sw/b.txt", &text)),
            )
            .unwrap();

        session.handle_action(CompareAction::ScrollPageDown);
        // The echo from the right panel is ignored until the next tick.
        session.handle_action(CompareAction::ScrollPanel {
            panel: Panel::Right,
            offset: 0,
        });
        let scroll = &session.comparison().unwrap().scroll;
        assert_eq!(scroll.offset(Panel::Left), 9);
        assert_eq!(scroll.offset(Panel::Right), 9);

        session.handle_action(CompareAction::Tick);
        session.handle_action(CompareAction::SwitchPanel);
        session.handle_action(CompareAction::ScrollBottom);
        let scroll = &session.comparison().unwrap().scroll;
        assert_eq!(scroll.offset(Panel::Right), 40);
        assert_eq!(scroll.offset(Panel::Left), 40);
    }

    #[test]
    fn test_key_and_search_scrolls_apply_before_tick() {
        let text: String = (0..50).map(|i| format!("l{}\n", i)).collect();
        let mut session = both_selected();
        session.set_viewport_height(10);
        let request = session.confirm().unwrap();
        session
            .complete(
                request.ticket,
                Ok(snapshot("sw/a.txt", &text)),
                Ok(snapshot("sw/b.txt", &text)),
            )
            .unwrap();

        // Several actions reduced within one frame, no tick in between.
        session.handle_action(CompareAction::ScrollPageDown);
        session.handle_action(CompareAction::SwitchPanel);
        session.handle_action(CompareAction::ScrollDown);
        let scroll = &session.comparison().unwrap().scroll;
        assert_eq!(scroll.offset(Panel::Right), 10);
        assert_eq!(scroll.offset(Panel::Left), 10);

        session.handle_action(CompareAction::StartSearch);
        for c in "l30".chars() {
            session.handle_action(CompareAction::SearchInsertChar(c));
        }
        session.handle_action(CompareAction::SubmitSearch);
        let scroll = &session.comparison().unwrap().scroll;
        assert_eq!(scroll.offset(Panel::Left), 25);
        assert_eq!(scroll.offset(Panel::Right), 25);
    }

    #[test]
    fn test_search_cursor_home_and_end() {
        let mut session = both_selected();
        let request = session.confirm().unwrap();
        session
            .complete(
                request.ticket,
                Ok(snapshot("sw/a.txt", "vlan 10")),
                Ok(snapshot("sw/b.txt", "vlan 20")),
            )
            .unwrap();

        session.handle_action(CompareAction::StartSearch);
        for c in "lan".chars() {
            session.handle_action(CompareAction::SearchInsertChar(c));
        }
        session.handle_action(CompareAction::SearchCursorHome);
        session.handle_action(CompareAction::SearchInsertChar('v'));
        session.handle_action(CompareAction::SearchCursorEnd);
        session.handle_action(CompareAction::SearchInsertChar(' '));

        let input = &session.comparison().unwrap().search_input;
        assert_eq!(input.text, "vlan ");
        assert_eq!(input.cursor, 5);
    }
}
