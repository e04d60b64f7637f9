//! Backup List State

use crate::actions::Preview;
use backup_client::{BackupEntry, Device};

/// Backup list screen state
#[derive(Debug, Clone, Default)]
pub struct BackupListState {
    /// Device whose backups are listed
    pub device: Option<Device>,
    /// Newest first, as ordered by the backend
    pub backups: Vec<BackupEntry>,
    pub cursor: usize,
    pub loading: bool,
    pub error: Option<String>,
    /// Path and content of the previewed backup
    pub preview: Option<(String, Preview)>,
    /// Path whose preview is being fetched
    pub preview_loading: Option<String>,
}

impl BackupListState {
    /// Backup under the cursor
    pub fn selected(&self) -> Option<&BackupEntry> {
        self.backups.get(self.cursor)
    }

    /// Move the cursor by `delta`, clamped to the list
    pub fn move_cursor(&mut self, delta: isize) {
        let last = self.backups.len().saturating_sub(1);
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
    }

    pub fn to_top(&mut self) {
        self.cursor = 0;
    }

    pub fn to_bottom(&mut self) {
        self.cursor = self.backups.len().saturating_sub(1);
    }

    /// Forget everything about the previous device
    pub fn reset_for(&mut self, device: Device) {
        *self = Self {
            device: Some(device),
            loading: true,
            ..Self::default()
        };
    }

    /// Hostname of the listed device
    pub fn hostname(&self) -> &str {
        self.device.as_ref().map(|d| d.hostname.as_str()).unwrap_or("")
    }
}
