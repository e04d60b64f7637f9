//! Backup List Actions

use backup_client::{BackupEntry, Device};

/// Content shown in the preview pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview {
    /// The snapshot text
    Text(String),
    /// The backend could not provide the snapshot
    Unavailable(String),
}

/// Tagged actions for the backup list screen
#[derive(Debug, Clone)]
pub enum BackupListAction {
    // === Loading ===
    /// Show the backups of `device` (triggers async fetch)
    Load(Device),
    /// Backups loaded successfully
    Loaded {
        device_index: usize,
        backups: Vec<BackupEntry>,
    },
    /// Loading failed
    LoadFailed(String),

    // === Navigation ===
    NavigateNext,
    NavigatePrevious,
    NavigateToTop,
    NavigateToBottom,

    // === Preview ===
    /// Fetch the backup under the cursor into the preview pane
    Preview,
    /// Preview content arrived
    PreviewLoaded { path: String, preview: Preview },

    /// Back to the device list
    Close,
}
