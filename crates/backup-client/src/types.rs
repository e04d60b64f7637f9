//! Backup backend data transfer objects
//!
//! These types mirror the JSON the backend returns. Unknown fields (stored
//! credentials in particular) are ignored on deserialization.

use crate::client::ClientError;
use serde::{Deserialize, Serialize};

fn default_device_type() -> String {
    "cisco_ios".to_string()
}

/// A managed network device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    /// Position in the backend list; the backend addresses devices by it
    #[serde(skip)]
    pub index: usize,

    /// Device hostname
    pub hostname: String,

    /// Management IP address
    pub ip: String,

    /// Login user on the device
    #[serde(default)]
    pub username: String,

    /// Netmiko device type (e.g., "cisco_ios")
    #[serde(default = "default_device_type")]
    pub device_type: String,

    /// "success" or "failed", absent if never backed up
    #[serde(default)]
    pub last_backup_status: Option<String>,

    /// Timestamp of the last backup attempt
    #[serde(default)]
    pub last_backup_time: Option<String>,
}

/// Outcome of a device's most recent backup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackupState {
    /// Never attempted
    Never,
    /// Last backup succeeded
    Success,
    /// Last backup failed
    Failed,
    /// The backend reported something else
    Unknown,
}

impl Device {
    /// State of the last backup
    pub fn backup_state(&self) -> BackupState {
        match self.last_backup_status.as_deref() {
            None | Some("") => BackupState::Never,
            Some("success") => BackupState::Success,
            Some("failed") => BackupState::Failed,
            Some(_) => BackupState::Unknown,
        }
    }

    /// Human readable description of the last backup
    pub fn backup_summary(&self) -> String {
        let time = self.last_backup_time.as_deref().unwrap_or("unknown time");
        match self.backup_state() {
            BackupState::Never => "Backup never attempted".to_string(),
            BackupState::Success => format!("Last successful backup: {}", time),
            BackupState::Failed => format!("Last backup failed: {}", time),
            BackupState::Unknown => "Unknown status".to_string(),
        }
    }

    /// Case-insensitive match of `filter` against hostname, IP, user and type
    pub fn matches(&self, filter: &str) -> bool {
        let filter = filter.trim().to_lowercase();
        if filter.is_empty() {
            return true;
        }
        [&self.hostname, &self.ip, &self.username, &self.device_type]
            .iter()
            .any(|field| field.to_lowercase().contains(&filter))
    }
}

/// A stored backup file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupEntry {
    /// File name, e.g. "core-sw1_20240101_120000.txt"
    pub filename: String,

    /// Storage path on the backend, used to fetch the content
    pub path: String,
}

/// Response of `/get_switch_backups`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupList {
    pub success: bool,

    #[serde(default)]
    pub hostname: Option<String>,

    /// Newest first, as ordered by the backend
    #[serde(default)]
    pub backups: Vec<BackupEntry>,

    #[serde(default)]
    pub message: Option<String>,
}

impl BackupList {
    /// Turn `success: false` into an error carrying the backend message
    pub fn into_result(self) -> anyhow::Result<Self> {
        if self.success {
            Ok(self)
        } else {
            Err(ClientError::Backend(message_or_default(self.message)).into())
        }
    }
}

/// Response of `/get_backup_content`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupContent {
    pub success: bool,

    #[serde(default)]
    pub filename: Option<String>,

    #[serde(default)]
    pub content: Option<String>,

    #[serde(default)]
    pub message: Option<String>,
}

impl BackupContent {
    /// The text, only when the backend actually returned it
    pub fn text(&self) -> Option<&str> {
        if self.success {
            self.content.as_deref()
        } else {
            None
        }
    }
}

/// Response of `/backup_switch`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupResult {
    pub success: bool,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub hostname: Option<String>,

    #[serde(default)]
    pub ip: Option<String>,

    /// Name of the file the configuration was saved to
    #[serde(default)]
    pub filename: Option<String>,
}

/// One device's line in a `/backup_all_switches` response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceBackupOutcome {
    pub success: bool,
    pub hostname: String,

    #[serde(default)]
    pub ip: String,

    /// Failure reason; empty on success
    #[serde(default)]
    pub message: String,

    #[serde(default)]
    pub filename: String,
}

/// Response of `/backup_all_switches`
///
/// The backend backs devices up one after another and answers once all are
/// done. `success` only says the run happened; per-device failures are in
/// `results`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkBackupResult {
    pub success: bool,

    /// Devices backed up successfully
    #[serde(default)]
    pub count: usize,

    /// Devices attempted
    #[serde(default)]
    pub total: usize,

    #[serde(default)]
    pub results: Vec<DeviceBackupOutcome>,

    #[serde(default)]
    pub message: Option<String>,
}

impl BulkBackupResult {
    /// Turn `success: false` (e.g. no devices configured) into an error
    pub fn into_result(self) -> anyhow::Result<Self> {
        if self.success {
            Ok(self)
        } else {
            Err(ClientError::Backend(message_or_default(self.message)).into())
        }
    }

    /// Devices whose backup failed
    pub fn failures(&self) -> impl Iterator<Item = &DeviceBackupOutcome> {
        self.results.iter().filter(|r| !r.success)
    }
}

/// Response of `/get_full_log`: current and archived activity log
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityLog {
    pub success: bool,

    #[serde(default)]
    pub log: Option<String>,

    #[serde(default)]
    pub message: Option<String>,
}

impl ActivityLog {
    pub fn into_result(self) -> anyhow::Result<Self> {
        if self.success {
            Ok(self)
        } else {
            Err(ClientError::Backend(message_or_default(self.message)).into())
        }
    }

    /// Non-blank log lines in file order (oldest first, archives after)
    pub fn lines(&self) -> Vec<String> {
        self.log
            .as_deref()
            .unwrap_or_default()
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Plain `{success, message?}` response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    pub success: bool,

    #[serde(default)]
    pub message: Option<String>,
}

fn message_or_default(message: Option<String>) -> String {
    message
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| "The backend reported an error".to_string())
}
