//! Client for the network backup backend
//!
//! This crate provides a trait-based client for the HTTP backend that stores
//! devices and their configuration backups. The backend owns credentials,
//! SSH execution and the backup files; this crate only speaks its JSON API.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              BackupClient trait                  │
//! │  - list_devices()                                │
//! │  - list_backups()                                │
//! │  - fetch_backup_content()                        │
//! │  - trigger_backup() / backup_all_devices()       │
//! │  - log_event() / fetch_activity_log()            │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!             ┌─────────────────────┐
//!             │  HttpBackupClient   │
//!             │  (reqwest, cookies) │
//!             └─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use backup_client::{BackupClient, HttpBackupClient};
//! use std::time::Duration;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = HttpBackupClient::new("https://backup.example.net", Duration::from_secs(30), false)?;
//! client.login("admin", "secret").await?;
//!
//! let devices = client.list_devices().await?;
//! if let Some(device) = devices.first() {
//!     let backups = client.list_backups(device.index).await?;
//!     println!("{} has {} backups", device.hostname, backups.backups.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod http_client;
pub mod types;

/// Cookie the backend stores its anti-forgery token in.
pub const CSRF_COOKIE: &str = "csrf_token";

/// Header mutating requests carry the anti-forgery token in.
pub const CSRF_HEADER: &str = "X-CSRFToken";

pub use client::{BackupClient, ClientError};
pub use http_client::HttpBackupClient;
pub use types::{
    Acknowledgement, ActivityLog, BackupContent, BackupEntry, BackupList, BackupResult,
    BackupState, BulkBackupResult, Device, DeviceBackupOutcome,
};
