//! Application State Module
//!
//! Contains all state types used by the application, organized by screen.

mod activity_log;
mod app;
mod backup_list;
mod device_list;
mod status_bar;

pub use activity_log::{ActivityLogState, LogLevel};
pub use app::{AppState, Screen};
pub use backup_list::BackupListState;
pub use device_list::{DeviceListState, DeviceSort, SortColumn};
pub use status_bar::{StatusBarState, StatusKind, StatusMessage};
