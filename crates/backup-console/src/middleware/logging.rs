//! Action log
//!
//! Writes one line per action to the log file. Payload-heavy actions (device
//! lists, backup listings, preview text, snapshots, activity log lines) are
//! summarized so a single preview does not flood the file. Failures are
//! logged at `warn`, ticks at `trace`.

use crate::actions::{
    Action, ActivityLogAction, BackupListAction, DeviceListAction, Preview,
};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{AppState, StatusKind};
use config_compare::{CompareAction, ConfigSnapshot, SnapshotError};
use log::Level;

#[derive(Default)]
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, _dispatcher: &Dispatcher) -> bool {
        let level = level_for(action);
        if log::log_enabled!(level) {
            log::log!(level, "Action: {}", summarize(action));
        }
        true
    }
}

fn level_for(action: &Action) -> Level {
    if action.is_noisy() {
        return Level::Trace;
    }
    match action {
        Action::Status(message) if message.kind == StatusKind::Error => Level::Warn,
        Action::DeviceList(DeviceListAction::LoadFailed(_))
        | Action::DeviceList(DeviceListAction::BackupAllFinished(Err(_)))
        | Action::DeviceList(DeviceListAction::BackupFinished { outcome: Err(_), .. })
        | Action::BackupList(BackupListAction::LoadFailed(_))
        | Action::ActivityLog(ActivityLogAction::LoadFailed(_)) => Level::Warn,
        _ => Level::Debug,
    }
}

/// One-line description of an action without its bulky payload
fn summarize(action: &Action) -> String {
    match action {
        Action::DeviceList(DeviceListAction::Loaded(devices)) => {
            format!("DeviceList::Loaded({} devices)", devices.len())
        }
        Action::DeviceList(DeviceListAction::BackupAllFinished(Ok(result))) => format!(
            "DeviceList::BackupAllFinished({}/{} backed up)",
            result.count, result.total
        ),
        Action::BackupList(BackupListAction::Loaded {
            device_index,
            backups,
        }) => format!(
            "BackupList::Loaded(device {}, {} backups)",
            device_index,
            backups.len()
        ),
        Action::BackupList(BackupListAction::PreviewLoaded { path, preview }) => match preview {
            Preview::Text(text) => {
                format!("BackupList::PreviewLoaded({}, {} bytes)", path, text.len())
            }
            Preview::Unavailable(reason) => {
                format!("BackupList::PreviewLoaded({}, unavailable: {})", path, reason)
            }
        },
        Action::Compare(CompareAction::Loaded {
            ticket,
            source,
            target,
        }) => format!(
            "Compare::Loaded(ticket {}, source {}, target {})",
            ticket.id(),
            snapshot_summary(source),
            snapshot_summary(target)
        ),
        Action::ActivityLog(ActivityLogAction::Loaded(lines)) => {
            format!("ActivityLog::Loaded({} lines)", lines.len())
        }
        Action::Status(message) => format!(
            "Status({:?} [{}] {})",
            message.kind, message.source, message.message
        ),
        other => format!("{:?}", other),
    }
}

fn snapshot_summary(result: &Result<ConfigSnapshot, SnapshotError>) -> String {
    match result {
        Ok(snapshot) => format!("{} ({} bytes)", snapshot.filename, snapshot.text().len()),
        Err(e) => format!("error: {}", e),
    }
}
