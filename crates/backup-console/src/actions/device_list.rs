//! Device List Actions

use crate::state::SortColumn;
use backup_client::{BackupResult, BulkBackupResult, Device};

/// Tagged actions for the device list screen
#[derive(Debug, Clone)]
pub enum DeviceListAction {
    // === Loading ===
    /// (Re)load the device list (triggers async fetch)
    Load,
    /// Devices loaded successfully
    Loaded(Vec<Device>),
    /// Loading failed
    LoadFailed(String),

    // === Navigation ===
    NavigateNext,
    NavigatePrevious,
    NavigateToTop,
    NavigateToBottom,

    // === Filter ===
    /// Focus the filter input
    FilterStart,
    /// Leave the filter input, keeping the filter
    FilterEnd,
    FilterChar(char),
    FilterBackspace,
    /// Clear the filter and leave the input
    FilterClear,

    /// Sort by a column, flipping direction if it is already the sort column
    SortBy(SortColumn),

    // === Operations ===
    /// Show the backups of the device under the cursor
    OpenBackups,
    /// Back up a device now
    TriggerBackup(Device),
    /// A triggered backup finished, successfully or not
    BackupFinished {
        device_index: usize,
        hostname: String,
        outcome: Result<BackupResult, String>,
    },
    /// Back up every device (triggers one long backend request)
    BackupAll,
    BackupAllFinished(Result<BulkBackupResult, String>),
}
