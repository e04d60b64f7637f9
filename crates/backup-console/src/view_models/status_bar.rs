//! Status Bar View Model
//!
//! Pre-computes presentation data for the status bar.

use crate::state::{AppState, StatusKind};
use ratatui::style::{Color, Modifier, Style};

/// Latest status message, ready to draw
#[derive(Debug, Clone)]
pub struct StatusBarViewModel {
    pub icon: &'static str,
    pub message: String,
    /// `HH:MM:SS`, empty for the welcome line
    pub timestamp: String,
    /// Component that reported the message
    pub source: String,
    /// Other unsettled operations, e.g. `+1 running`
    pub running_note: String,
    /// Colored by status kind
    pub message_style: Style,
    pub bg_color: Color,
    /// Timestamp and source
    pub metadata_style: Style,
}

impl StatusBarViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let theme = &state.theme;
        let metadata_style = Style::default().fg(theme.text_muted);

        let Some(msg) = state.status_bar.latest() else {
            return Self {
                icon: "👋",
                message: "Network backup console".to_string(),
                timestamp: String::new(),
                source: String::new(),
                running_note: String::new(),
                message_style: metadata_style.add_modifier(Modifier::ITALIC),
                bg_color: theme.bg_primary,
                metadata_style,
            };
        };

        let fg = match msg.kind {
            StatusKind::Running => theme.status_warning,
            StatusKind::Success => theme.status_success,
            StatusKind::Error => theme.status_error,
            StatusKind::Info => theme.status_info,
        };
        let shown_pending = usize::from(msg.kind == StatusKind::Running && msg.operation.is_some());
        let others = state.status_bar.pending().saturating_sub(shown_pending);
        let running_note = if others == 0 {
            String::new()
        } else {
            format!("+{} running", others)
        };

        Self {
            icon: msg.kind.icon(),
            message: msg.message.clone(),
            timestamp: msg.timestamp.format("%H:%M:%S").to_string(),
            source: msg.source.clone(),
            running_note,
            message_style: Style::default().fg(fg).add_modifier(Modifier::BOLD),
            bg_color: theme.bg_primary,
            metadata_style,
        }
    }
}
