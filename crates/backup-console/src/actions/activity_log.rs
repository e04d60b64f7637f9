//! Activity Log Actions

/// Tagged actions for the activity log screen
#[derive(Debug, Clone)]
pub enum ActivityLogAction {
    /// Show the log screen and (re)load the log
    Open,
    /// Log lines, oldest first
    Loaded(Vec<String>),
    LoadFailed(String),

    ScrollDown,
    ScrollUp,
    PageDown,
    PageUp,
    ScrollTop,
    ScrollBottom,

    /// Go back to the screen the log was opened from
    Close,
}
