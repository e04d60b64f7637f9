//! Activity Log State
//!
//! The backend's full activity log (current file, then archives) shown as a
//! scrollable list of lines.

use super::Screen;

/// Severity a log line is colored with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warning,
    Success,
    Plain,
}

impl LogLevel {
    /// Guess the severity from the words in a line
    pub fn classify(line: &str) -> Self {
        let line = line.to_lowercase();
        if line.contains("error") || line.contains("failed") {
            Self::Error
        } else if line.contains("warning") {
            Self::Warning
        } else if line.contains("success") || line.contains("completed") {
            Self::Success
        } else {
            Self::Plain
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ActivityLogState {
    pub lines: Vec<String>,
    pub loading: bool,
    pub error: Option<String>,
    /// First visible line
    pub scroll: usize,
    /// Lines that fit on screen, set while rendering
    pub viewport_height: usize,
    /// Screen to go back to on close
    pub return_to: Screen,
}

impl ActivityLogState {
    /// Start loading, remembering where the log was opened from
    pub fn open(&mut self, from: Screen) {
        if from != Screen::ActivityLog {
            self.return_to = from;
        }
        self.loading = true;
        self.error = None;
    }

    pub fn max_scroll(&self) -> usize {
        self.lines.len().saturating_sub(self.viewport_height.max(1))
    }

    pub fn scroll_by(&mut self, delta: isize) {
        self.scroll = self.scroll.saturating_add_signed(delta).min(self.max_scroll());
    }

    pub fn page(&self) -> isize {
        self.viewport_height.max(1) as isize
    }

    pub fn to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn to_bottom(&mut self) {
        self.scroll = self.max_scroll();
    }

    /// Record the viewport height and keep the scroll offset inside it
    pub fn set_viewport(&mut self, height: usize) {
        self.viewport_height = height;
        self.scroll = self.scroll.min(self.max_scroll());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_classify_like_the_web_console() {
        assert_eq!(
            LogLevel::classify("ERROR during the backup of sw1: timeout"),
            LogLevel::Error
        );
        assert_eq!(LogLevel::classify("Console: backup of sw1 failed"), LogLevel::Error);
        assert_eq!(LogLevel::classify("WARNING - disk almost full"), LogLevel::Warning);
        assert_eq!(
            LogLevel::classify("Backup completed for sw1 (10.0.0.1)"),
            LogLevel::Success
        );
        // Errors win over success words
        assert_eq!(
            LogLevel::classify("completed with error"),
            LogLevel::Error
        );
        assert_eq!(LogLevel::classify("=== Log events.2024-04.log ==="), LogLevel::Plain);
    }

    #[test]
    fn test_scroll_is_clamped_to_viewport() {
        let mut state = ActivityLogState {
            lines: (0..30).map(|i| format!("line {}", i)).collect(),
            ..ActivityLogState::default()
        };
        state.set_viewport(10);
        state.scroll_by(100);
        assert_eq!(state.scroll, 20);
        state.scroll_by(-state.page());
        assert_eq!(state.scroll, 10);
        state.to_top();
        state.scroll_by(-1);
        assert_eq!(state.scroll, 0);

        state.to_bottom();
        state.set_viewport(25);
        assert_eq!(state.scroll, 5);
    }

    #[test]
    fn test_reopen_keeps_return_screen() {
        let mut state = ActivityLogState::default();
        state.open(Screen::Backups);
        state.open(Screen::ActivityLog);
        assert_eq!(state.return_to, Screen::Backups);
        assert!(state.loading);
    }
}
