//! Status Bar State
//!
//! Messages are reported per operation. A message tagged with an operation
//! key (`backup:core-sw1`, `backup-all`, ...) settles the `Running` message
//! of the same key, so "Backing up core-sw1" is replaced by its outcome
//! instead of lingering underneath it.

use chrono::{DateTime, Local};
use std::collections::VecDeque;

const MAX_HISTORY: usize = 100;

/// Kind of status message (determines icon and color)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Operation started/in progress
    Running,
    /// Operation completed successfully
    Success,
    /// Operation failed
    Error,
    /// Informational message
    Info,
}

impl StatusKind {
    /// Get the icon for this status kind
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Running => "⏳",
            Self::Success => "✅",
            Self::Error => "🚨",
            Self::Info => "ℹ️",
        }
    }
}

/// A single status message with metadata
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub timestamp: DateTime<Local>,
    pub kind: StatusKind,
    pub message: String,
    /// Component that reported it (e.g. "backup", "compare")
    pub source: String,
    /// Operation this message belongs to
    pub operation: Option<String>,
}

impl StatusMessage {
    pub fn new(kind: StatusKind, message: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            kind,
            message: message.into(),
            source: source.into(),
            operation: None,
        }
    }

    pub fn running(message: impl Into<String>, source: impl Into<String>) -> Self {
        Self::new(StatusKind::Running, message, source)
    }

    pub fn success(message: impl Into<String>, source: impl Into<String>) -> Self {
        Self::new(StatusKind::Success, message, source)
    }

    pub fn error(message: impl Into<String>, source: impl Into<String>) -> Self {
        Self::new(StatusKind::Error, message, source)
    }

    pub fn info(message: impl Into<String>, source: impl Into<String>) -> Self {
        Self::new(StatusKind::Info, message, source)
    }

    /// Tag the message with the operation it starts or settles
    pub fn for_operation(mut self, key: impl Into<String>) -> Self {
        self.operation = Some(key.into());
        self
    }

    fn is_pending(&self) -> bool {
        self.kind == StatusKind::Running && self.operation.is_some()
    }
}

/// Status bar state - history of messages, newest at the back
#[derive(Debug, Clone, Default)]
pub struct StatusBarState {
    pub messages: VecDeque<StatusMessage>,
}

impl StatusBarState {
    /// Message to show: the newest one
    pub fn latest(&self) -> Option<&StatusMessage> {
        self.messages.back()
    }

    /// Record a message.
    ///
    /// A pending message of the same operation is dropped, whether the new
    /// one is its outcome or a fresh start of the same operation.
    pub fn report(&mut self, message: StatusMessage) {
        if let Some(key) = &message.operation {
            self.messages
                .retain(|m| !(m.is_pending() && m.operation.as_ref() == Some(key)));
        }
        self.messages.push_back(message);
        while self.messages.len() > MAX_HISTORY {
            self.messages.pop_front();
        }
    }

    /// Operations started but not settled yet
    pub fn pending(&self) -> usize {
        self.messages.iter().filter(|m| m.is_pending()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(state: &StatusBarState) -> Vec<&str> {
        state.messages.iter().map(|m| m.message.as_str()).collect()
    }

    #[test]
    fn test_outcome_replaces_running_message() {
        let mut state = StatusBarState::default();
        state.report(StatusMessage::running("Backing up sw1", "backup").for_operation("backup:sw1"));
        state.report(StatusMessage::running("Backing up sw2", "backup").for_operation("backup:sw2"));
        assert_eq!(state.pending(), 2);

        state.report(
            StatusMessage::success("sw1 saved to sw1_20240501.txt", "backup")
                .for_operation("backup:sw1"),
        );
        assert_eq!(
            texts(&state),
            vec!["Backing up sw2", "sw1 saved to sw1_20240501.txt"]
        );
        assert_eq!(state.pending(), 1);
    }

    #[test]
    fn test_untagged_messages_never_settle() {
        let mut state = StatusBarState::default();
        state.report(StatusMessage::running("Loading", "compare"));
        state.report(StatusMessage::info("Search cleared", "compare"));
        assert_eq!(texts(&state), vec!["Loading", "Search cleared"]);
        assert_eq!(state.pending(), 0);
    }

    #[test]
    fn test_settled_outcomes_are_kept() {
        let mut state = StatusBarState::default();
        state.report(StatusMessage::error("Backup of sw1 failed", "backup").for_operation("backup:sw1"));
        state.report(StatusMessage::running("Backing up sw1", "backup").for_operation("backup:sw1"));
        assert_eq!(texts(&state), vec!["Backup of sw1 failed", "Backing up sw1"]);
    }

    #[test]
    fn test_history_is_bounded() {
        let mut state = StatusBarState::default();
        for i in 0..MAX_HISTORY + 5 {
            state.report(StatusMessage::info(format!("m{}", i), "test"));
        }
        assert_eq!(state.messages.len(), MAX_HISTORY);
        assert_eq!(state.messages.front().map(|m| m.message.as_str()), Some("m5"));
    }
}
