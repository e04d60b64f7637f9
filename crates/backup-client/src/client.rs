//! Backup client trait
//!
//! This module defines the `BackupClient` trait that client implementations
//! satisfy, and the typed errors callers may want to tell apart.

use crate::types::{
    Acknowledgement, ActivityLog, BackupContent, BackupList, BackupResult, BulkBackupResult,
    Device,
};
use async_trait::async_trait;
use thiserror::Error;

/// Failures callers react to specifically. Everything else is a plain
/// `anyhow` error with context.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClientError {
    /// The backend redirected to its login page.
    #[error("Not logged in to {0}")]
    NotLoggedIn(String),

    /// The login form was rejected.
    #[error("Invalid credentials for user '{0}'")]
    InvalidCredentials(String),

    /// The backend answered with `success: false`.
    #[error("{0}")]
    Backend(String),
}

/// Backup backend API client trait
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across
/// async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use backup_client::{BackupClient, Device};
///
/// async fn hostnames(client: &dyn BackupClient) -> anyhow::Result<Vec<String>> {
///     Ok(client.list_devices().await?.into_iter().map(|d| d.hostname).collect())
/// }
/// ```
#[async_trait]
pub trait BackupClient: Send + Sync {
    /// Establish a session with the backend
    async fn login(&self, username: &str, password: &str) -> anyhow::Result<()>;

    /// Fetch all devices, each tagged with its position in the backend list
    async fn list_devices(&self) -> anyhow::Result<Vec<Device>>;

    /// Fetch the stored backups of a device, newest first
    ///
    /// # Arguments
    ///
    /// * `device_index` - Position of the device in the backend list
    async fn list_backups(&self, device_index: usize) -> anyhow::Result<BackupList>;

    /// Fetch the content of a stored backup
    ///
    /// A backup the backend cannot read is not an error: the returned
    /// `BackupContent` has `success: false` and no content.
    async fn fetch_backup_content(&self, path: &str) -> anyhow::Result<BackupContent>;

    /// Run a backup of a device now
    ///
    /// The backend reports device failures (SSH, authentication) in the
    /// returned `BackupResult` rather than as an error.
    async fn trigger_backup(&self, device_index: usize) -> anyhow::Result<BackupResult>;

    /// Back up every device, one after another
    ///
    /// Resolves once the whole run finished, which can take minutes.
    async fn backup_all_devices(&self) -> anyhow::Result<BulkBackupResult>;

    /// Append a line to the backend's activity log
    async fn log_event(&self, message: &str) -> anyhow::Result<Acknowledgement>;

    /// Read the activity log, archived logs included
    async fn fetch_activity_log(&self) -> anyhow::Result<ActivityLog>;
}
