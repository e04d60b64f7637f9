//! Trait for fetching configuration snapshots.

use async_trait::async_trait;
use thiserror::Error;

use crate::model::ConfigSnapshot;

/// Errors that can occur when fetching a snapshot.
///
/// A snapshot the backend does not have is not an error; it comes back as
/// [`SnapshotContent::NotFound`](crate::model::SnapshotContent::NotFound).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    /// The request did not complete (connection, timeout, bad payload).
    #[error("Transport error: {0}")]
    Transport(String),

    /// The backend session is not authenticated.
    #[error("Not logged in to the backup backend")]
    Unauthorized,
}

/// Provides raw snapshot content to the comparison session.
///
/// # Example
///
/// ```ignore
/// struct BackendSource {
///     client: Arc<dyn BackupClient>,
/// }
///
/// #[async_trait]
/// impl SnapshotSource for BackendSource {
///     async fn fetch_snapshot(&self, path: &str) -> Result<ConfigSnapshot, SnapshotError> {
///         let content = self.client
///             .fetch_backup_content(path)
///             .await
///             .map_err(|e| SnapshotError::Transport(e.to_string()))?;
///         Ok(match content.content {
///             Some(text) => ConfigSnapshot::new(path, text),
///             None => ConfigSnapshot::not_found(path, content.message),
///         })
///     }
/// }
/// ```
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Fetch the snapshot stored at `path`.
    async fn fetch_snapshot(&self, path: &str) -> Result<ConfigSnapshot, SnapshotError>;
}
