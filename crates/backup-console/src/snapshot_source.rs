//! Snapshot source backed by the backup backend

use async_trait::async_trait;
use backup_client::{BackupClient, BackupContent, ClientError};
use config_compare::{ConfigSnapshot, SnapshotError, SnapshotSource};
use std::sync::Arc;

/// Fetches comparison snapshots through a [`BackupClient`].
pub struct BackendSnapshotSource {
    client: Arc<dyn BackupClient>,
}

impl BackendSnapshotSource {
    pub fn new(client: Arc<dyn BackupClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SnapshotSource for BackendSnapshotSource {
    async fn fetch_snapshot(&self, path: &str) -> Result<ConfigSnapshot, SnapshotError> {
        let content = self
            .client
            .fetch_backup_content(path)
            .await
            .map_err(snapshot_error)?;
        Ok(snapshot_from_content(path, content))
    }
}

/// A readable backup becomes text, anything else the not-found placeholder.
fn snapshot_from_content(path: &str, content: BackupContent) -> ConfigSnapshot {
    let snapshot = match content.text() {
        Some(text) => ConfigSnapshot::new(path, text),
        None => {
            log::warn!(
                "Backup {} not available: {}",
                path,
                content.message.as_deref().unwrap_or("no message")
            );
            ConfigSnapshot::not_found(path, content.message.clone())
        }
    };
    match content.filename {
        Some(filename) if !filename.is_empty() => snapshot.with_filename(filename),
        _ => snapshot,
    }
}

fn snapshot_error(error: anyhow::Error) -> SnapshotError {
    match error.downcast_ref::<ClientError>() {
        Some(ClientError::NotLoggedIn(_)) => SnapshotError::Unauthorized,
        _ => SnapshotError::Transport(format!("{:#}", error)),
    }
}
