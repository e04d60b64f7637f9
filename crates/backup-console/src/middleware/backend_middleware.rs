//! Backend Middleware
//!
//! Central middleware for all backup backend interactions:
//! - Login (on Started)
//! - Device and backup list loading
//! - Backup preview
//! - Triggering single and bulk backups and recording them in the activity log
//! - Reading the full activity log
//! - Fetching both snapshots of a comparison
//!
//! Requests run as tokio tasks; results come back as actions through the
//! dispatcher.

use crate::actions::{
    Action, ActivityLogAction, BackupListAction, DeviceListAction, Event, Preview,
};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::snapshot_source::BackendSnapshotSource;
use crate::state::{AppState, Screen, StatusMessage};
use backup_client::{BackupClient, BackupResult, BulkBackupResult, Device};
use config_compare::{CompareAction, CompareEvent, FetchRequest, SnapshotSource};
use std::sync::Arc;
use tokio::runtime::Handle;

const BACKUP_ALL: &str = "backup-all";

/// Operation key of a single device backup
fn backup_operation(hostname: &str) -> String {
    format!("backup:{}", hostname)
}

/// Login name and password for the backend session
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Middleware for all backend operations
pub struct BackendMiddleware {
    client: Arc<dyn BackupClient>,
    runtime: Handle,
    credentials: Option<Credentials>,
}

impl BackendMiddleware {
    pub fn new(
        client: Arc<dyn BackupClient>,
        runtime: Handle,
        credentials: Option<Credentials>,
    ) -> Self {
        Self {
            client,
            runtime,
            credentials,
        }
    }

    fn login(&self, dispatcher: &Dispatcher) {
        let Some(credentials) = self.credentials.clone() else {
            dispatcher.report(StatusMessage::error(
                "No password configured (set BACKUP_CONSOLE_PASSWORD)",
                "login",
            ));
            return;
        };

        dispatcher.report(
            StatusMessage::running(format!("Logging in as {}", credentials.username), "login")
                .for_operation("login"),
        );
        let client = Arc::clone(&self.client);
        let dispatcher = dispatcher.clone();
        self.runtime.spawn(async move {
            match client
                .login(&credentials.username, &credentials.password)
                .await
            {
                Ok(()) => {
                    log::info!("BackendMiddleware: logged in as {}", credentials.username);
                    dispatcher.report(
                        StatusMessage::success(
                            format!("Logged in as {}", credentials.username),
                            "login",
                        )
                        .for_operation("login"),
                    );
                    dispatcher.event(Event::LoggedIn);
                }
                Err(e) => {
                    log::error!("BackendMiddleware: login failed: {:#}", e);
                    dispatcher.report(
                        StatusMessage::error(format!("Login failed: {:#}", e), "login")
                            .for_operation("login"),
                    );
                }
            }
        });
    }

    fn load_devices(&self, dispatcher: &Dispatcher) {
        let client = Arc::clone(&self.client);
        let dispatcher = dispatcher.clone();
        self.runtime.spawn(async move {
            match client.list_devices().await {
                Ok(devices) => {
                    log::debug!("BackendMiddleware: loaded {} devices", devices.len());
                    dispatcher.dispatch(Action::DeviceList(DeviceListAction::Loaded(devices)));
                }
                Err(e) => {
                    let message = format!("Failed to load devices: {:#}", e);
                    log::error!("BackendMiddleware: {}", message);
                    dispatcher.dispatch(Action::DeviceList(DeviceListAction::LoadFailed(
                        message.clone(),
                    )));
                    dispatcher.report(StatusMessage::error(message, "devices"));
                }
            }
        });
    }

    fn load_backups(&self, device: &Device, dispatcher: &Dispatcher) {
        let client = Arc::clone(&self.client);
        let dispatcher = dispatcher.clone();
        let device_index = device.index;
        let hostname = device.hostname.clone();
        self.runtime.spawn(async move {
            let result = match client.list_backups(device_index).await {
                Ok(list) => list.into_result(),
                Err(e) => Err(e),
            };
            match result {
                Ok(list) => {
                    log::debug!(
                        "BackendMiddleware: {} has {} backups",
                        hostname,
                        list.backups.len()
                    );
                    dispatcher.dispatch(Action::BackupList(BackupListAction::Loaded {
                        device_index,
                        backups: list.backups,
                    }));
                }
                Err(e) => {
                    let message = format!("Failed to load backups of {}: {:#}", hostname, e);
                    log::error!("BackendMiddleware: {}", message);
                    dispatcher.dispatch(Action::BackupList(BackupListAction::LoadFailed(
                        message.clone(),
                    )));
                    dispatcher.report(StatusMessage::error(message, "backups"));
                }
            }
        });
    }

    fn load_preview(&self, path: String, dispatcher: &Dispatcher) {
        let client = Arc::clone(&self.client);
        let dispatcher = dispatcher.clone();
        self.runtime.spawn(async move {
            let preview = match client.fetch_backup_content(&path).await {
                Ok(content) => match content.text() {
                    Some(text) => Preview::Text(text.to_string()),
                    None => Preview::Unavailable(
                        content
                            .message
                            .unwrap_or_else(|| "Backup not available".to_string()),
                    ),
                },
                Err(e) => {
                    log::error!("BackendMiddleware: preview of {} failed: {:#}", path, e);
                    Preview::Unavailable(format!("{:#}", e))
                }
            };
            dispatcher.dispatch(Action::BackupList(BackupListAction::PreviewLoaded {
                path,
                preview,
            }));
        });
    }

    fn trigger_backup(&self, device: &Device, dispatcher: &Dispatcher) {
        let client = Arc::clone(&self.client);
        let dispatcher = dispatcher.clone();
        let device_index = device.index;
        let hostname = device.hostname.clone();

        dispatcher.report(
            StatusMessage::running(format!("Backing up {}", hostname), "backup")
                .for_operation(backup_operation(&hostname)),
        );

        self.runtime.spawn(async move {
            let outcome = client
                .trigger_backup(device_index)
                .await
                .map_err(|e| format!("{:#}", e));
            dispatcher.dispatch(Action::DeviceList(DeviceListAction::BackupFinished {
                device_index,
                hostname,
                outcome,
            }));
        });
    }

    /// Report a finished backup and refresh what shows backup state
    fn backup_finished(
        &self,
        device_index: usize,
        hostname: &str,
        outcome: &Result<BackupResult, String>,
        state: &AppState,
        dispatcher: &Dispatcher,
    ) {
        let (status, activity) = backup_messages(hostname, outcome);
        dispatcher.report(status);
        self.record_activity(activity);
        self.refresh_backup_state(Some(device_index), state, dispatcher);
    }

    fn backup_all(&self, dispatcher: &Dispatcher) {
        dispatcher.report(
            StatusMessage::running("Backing up all devices", "backup").for_operation(BACKUP_ALL),
        );

        let client = Arc::clone(&self.client);
        let dispatcher = dispatcher.clone();
        self.runtime.spawn(async move {
            let outcome = client
                .backup_all_devices()
                .await
                .map_err(|e| format!("{:#}", e));
            dispatcher.dispatch(Action::DeviceList(DeviceListAction::BackupAllFinished(outcome)));
        });
    }

    fn backup_all_finished(
        &self,
        outcome: &Result<BulkBackupResult, String>,
        state: &AppState,
        dispatcher: &Dispatcher,
    ) {
        let (status, activity) = bulk_backup_messages(outcome);
        dispatcher.report(status);
        self.record_activity(activity);
        self.refresh_backup_state(None, state, dispatcher);
    }

    /// Reload what shows backup state: the device table, and the backup
    /// list if it shows `device_index` (any device when `None`)
    fn refresh_backup_state(
        &self,
        device_index: Option<usize>,
        state: &AppState,
        dispatcher: &Dispatcher,
    ) {
        dispatcher.dispatch(Action::DeviceList(DeviceListAction::Load));
        let Some(listed) = state.backups.device.as_ref() else {
            return;
        };
        let affected = device_index.is_none_or(|index| index == listed.index);
        if state.screen != Screen::Devices && affected {
            dispatcher.dispatch(Action::BackupList(BackupListAction::Load(listed.clone())));
        }
    }

    fn load_activity_log(&self, dispatcher: &Dispatcher) {
        let client = Arc::clone(&self.client);
        let dispatcher = dispatcher.clone();
        self.runtime.spawn(async move {
            match client.fetch_activity_log().await {
                Ok(activity) => dispatcher.dispatch(Action::ActivityLog(ActivityLogAction::Loaded(
                    activity.lines(),
                ))),
                Err(e) => {
                    let message = format!("Failed to load the activity log: {:#}", e);
                    log::error!("BackendMiddleware: {}", message);
                    dispatcher.dispatch(Action::ActivityLog(ActivityLogAction::LoadFailed(
                        message.clone(),
                    )));
                    dispatcher.report(StatusMessage::error(message, "log"));
                }
            }
        });
    }

    fn fetch_snapshots(&self, request: &FetchRequest, dispatcher: &Dispatcher) {
        let source = BackendSnapshotSource::new(Arc::clone(&self.client));
        let dispatcher = dispatcher.clone();
        let request = request.clone();
        self.runtime.spawn(async move {
            let (left, right) = tokio::join!(
                source.fetch_snapshot(&request.source_path),
                source.fetch_snapshot(&request.target_path)
            );
            dispatcher.dispatch(Action::Compare(CompareAction::Loaded {
                ticket: request.ticket,
                source: Box::new(left),
                target: Box::new(right),
            }));
        });
    }

    /// Append a line to the backend's activity log; failures are only logged
    fn record_activity(&self, message: String) {
        let client = Arc::clone(&self.client);
        self.runtime.spawn(async move {
            if let Err(e) = client.log_event(&message).await {
                log::warn!("BackendMiddleware: failed to record activity: {:#}", e);
            }
        });
    }
}

/// Status message and activity log line for a finished backup
fn backup_messages(
    hostname: &str,
    outcome: &Result<BackupResult, String>,
) -> (StatusMessage, String) {
    let (status, activity) = match outcome {
        Ok(result) if result.success => {
            let file = result.filename.as_deref().unwrap_or("backup file");
            (
                StatusMessage::success(format!("{} saved to {}", hostname, file), "backup"),
                format!("Console: backup of {} saved to {}", hostname, file),
            )
        }
        Ok(result) => {
            let reason = result.message.as_deref().unwrap_or("unknown error");
            (
                StatusMessage::error(format!("Backup of {} failed: {}", hostname, reason), "backup"),
                format!("Console: backup of {} failed: {}", hostname, reason),
            )
        }
        Err(e) => (
            StatusMessage::error(format!("Backup of {} failed: {}", hostname, e), "backup"),
            format!("Console: backup of {} failed: {}", hostname, e),
        ),
    };
    (status.for_operation(backup_operation(hostname)), activity)
}

/// Status message and activity log line for a finished bulk backup
fn bulk_backup_messages(outcome: &Result<BulkBackupResult, String>) -> (StatusMessage, String) {
    let (status, activity) = match outcome {
        Ok(result) => {
            let failed: Vec<String> = result
                .failures()
                .map(|r| format!("{} ({})", r.hostname, r.message))
                .collect();
            if failed.is_empty() {
                (
                    StatusMessage::success(
                        format!("Backup completed for {} devices", result.count),
                        "backup",
                    ),
                    format!(
                        "Console: backup of all devices completed, {}/{} saved",
                        result.count, result.total
                    ),
                )
            } else {
                let failed = failed.join(", ");
                (
                    StatusMessage::error(
                        format!(
                            "Backed up {}/{} devices, failed: {}",
                            result.count, result.total, failed
                        ),
                        "backup",
                    ),
                    format!(
                        "Console: backup of all devices, {}/{} saved, failed: {}",
                        result.count, result.total, failed
                    ),
                )
            }
        }
        Err(e) => (
            StatusMessage::error(format!("Backup of all devices failed: {}", e), "backup"),
            format!("Console: backup of all devices failed: {}", e),
        ),
    };
    (status.for_operation(BACKUP_ALL), activity)
}

impl Middleware for BackendMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Event(Event::Started) => self.login(dispatcher),
            Action::Event(Event::LoggedIn) => {
                dispatcher.dispatch(Action::DeviceList(DeviceListAction::Load));
            }

            Action::DeviceList(DeviceListAction::Load) => self.load_devices(dispatcher),
            Action::DeviceList(DeviceListAction::OpenBackups) => {
                if let Some(device) = state.devices.selected() {
                    dispatcher.dispatch(Action::BackupList(BackupListAction::Load(device.clone())));
                }
                return false;
            }
            Action::DeviceList(DeviceListAction::TriggerBackup(device)) => {
                if state.devices.backup_in_progress() {
                    dispatcher.report(StatusMessage::error("A backup is already running", "backup"));
                    return false;
                }
                self.trigger_backup(device, dispatcher);
            }
            Action::DeviceList(DeviceListAction::BackupAll) => {
                if state.devices.backup_in_progress() {
                    dispatcher.report(StatusMessage::error("A backup is already running", "backup"));
                    return false;
                }
                self.backup_all(dispatcher);
            }
            Action::DeviceList(DeviceListAction::BackupAllFinished(outcome)) => {
                self.backup_all_finished(outcome, state, dispatcher)
            }
            Action::DeviceList(DeviceListAction::BackupFinished {
                device_index,
                hostname,
                outcome,
            }) => self.backup_finished(*device_index, hostname, outcome, state, dispatcher),

            Action::BackupList(BackupListAction::Load(device)) => {
                self.load_backups(device, dispatcher)
            }
            Action::BackupList(BackupListAction::Preview) => {
                if let Some(entry) = state.backups.selected() {
                    self.load_preview(entry.path.clone(), dispatcher);
                }
            }

            Action::ActivityLog(ActivityLogAction::Open) => self.load_activity_log(dispatcher),

            Action::Event(Event::Compare(CompareEvent::FetchSnapshots(request))) => {
                self.fetch_snapshots(request, dispatcher)
            }
            Action::Event(Event::Compare(CompareEvent::Opened { selection, .. })) => {
                self.record_activity(format!(
                    "Console: compared {} and {} of {}",
                    selection.source_path, selection.target_path, selection.device_name
                ));
            }

            _ => {}
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::state::{StatusBarState, StatusKind};
    use backup_client::{
        Acknowledgement, ActivityLog, BackupContent, BackupList, DeviceBackupOutcome,
    };
    use pretty_assertions::assert_eq;
    use std::sync::mpsc::{self, Receiver};
    use std::sync::Mutex;
    use std::time::Duration;

    /// In-memory backend recording activity log lines
    #[derive(Default)]
    struct MemoryClient {
        activity: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl BackupClient for MemoryClient {
        async fn login(&self, _username: &str, password: &str) -> anyhow::Result<()> {
            anyhow::ensure!(password == "secret", "Invalid credentials");
            Ok(())
        }

        async fn list_devices(&self) -> anyhow::Result<Vec<Device>> {
            Ok(vec![device()])
        }

        async fn list_backups(&self, _device_index: usize) -> anyhow::Result<BackupList> {
            Ok(BackupList {
                success: false,
                message: Some("Switch not found".into()),
                ..BackupList::default()
            })
        }

        async fn fetch_backup_content(&self, path: &str) -> anyhow::Result<BackupContent> {
            Ok(BackupContent {
                success: true,
                filename: None,
                content: Some(format!("hostname sw1\n! {}\n", path)),
                message: None,
            })
        }

        async fn trigger_backup(&self, _device_index: usize) -> anyhow::Result<BackupResult> {
            Ok(BackupResult {
                success: true,
                filename: Some("sw1_20240501.txt".into()),
                ..BackupResult::default()
            })
        }

        async fn backup_all_devices(&self) -> anyhow::Result<BulkBackupResult> {
            Ok(bulk_result())
        }

        async fn log_event(&self, message: &str) -> anyhow::Result<Acknowledgement> {
            if let Ok(mut activity) = self.activity.lock() {
                activity.push(message.to_string());
            }
            Ok(Acknowledgement {
                success: true,
                message: None,
            })
        }

        async fn fetch_activity_log(&self) -> anyhow::Result<ActivityLog> {
            let log = self.activity.lock().map(|a| a.join("\n")).unwrap_or_default();
            Ok(ActivityLog {
                success: true,
                log: Some(format!("2024-05-01 10:00:00 - INFO - Login\n\n{}", log)),
                message: None,
            })
        }
    }

    fn bulk_result() -> BulkBackupResult {
        BulkBackupResult {
            success: true,
            count: 1,
            total: 2,
            results: vec![
                DeviceBackupOutcome {
                    success: true,
                    hostname: "sw1".into(),
                    ip: "10.0.0.1".into(),
                    filename: "sw1_20240501.txt".into(),
                    ..DeviceBackupOutcome::default()
                },
                DeviceBackupOutcome {
                    success: false,
                    hostname: "sw2".into(),
                    ip: "10.0.0.2".into(),
                    message: "Authentication failed".into(),
                    ..DeviceBackupOutcome::default()
                },
            ],
            message: None,
        }
    }

    fn device() -> Device {
        Device {
            index: 0,
            hostname: "sw1".into(),
            ip: "10.0.0.1".into(),
            username: "admin".into(),
            device_type: "cisco_ios".into(),
            last_backup_status: None,
            last_backup_time: None,
        }
    }

    fn setup(
        password: &str,
    ) -> (
        tokio::runtime::Runtime,
        BackendMiddleware,
        Dispatcher,
        Receiver<Action>,
    ) {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let middleware = BackendMiddleware::new(
            Arc::new(MemoryClient::default()),
            runtime.handle().clone(),
            Some(Credentials {
                username: "admin".into(),
                password: password.into(),
            }),
        );
        let (tx, rx) = mpsc::channel();
        (runtime, middleware, Dispatcher::new(tx), rx)
    }

    fn next(rx: &Receiver<Action>) -> Action {
        rx.recv_timeout(Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_login_then_event() {
        let (_runtime, mut mw, dispatcher, rx) = setup("secret");
        assert!(mw.handle(&Action::event(Event::Started), &AppState::default(), &dispatcher));

        let mut status = StatusBarState::default();
        for _ in 0..2 {
            match next(&rx) {
                Action::Status(message) => status.report(message),
                other => panic!("unexpected {:?}", other),
            }
        }
        assert!(matches!(next(&rx), Action::Event(Event::LoggedIn)));
        assert_eq!(status.messages.len(), 1);
        assert_eq!(
            status.latest().map(|m| m.message.as_str()),
            Some("Logged in as admin")
        );
    }

    #[test]
    fn test_failed_login_reports_error() {
        let (_runtime, mut mw, dispatcher, rx) = setup("wrong");
        mw.handle(&Action::event(Event::Started), &AppState::default(), &dispatcher);

        assert!(matches!(next(&rx), Action::Status(m) if m.kind == StatusKind::Running));
        match next(&rx) {
            Action::Status(StatusMessage { kind, message, .. }) => {
                assert_eq!(kind, StatusKind::Error);
                assert!(message.starts_with("Login failed"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_backend_failure_on_backup_list() {
        let (_runtime, mut mw, dispatcher, rx) = setup("secret");
        mw.handle(
            &Action::BackupList(BackupListAction::Load(device())),
            &AppState::default(),
            &dispatcher,
        );

        match next(&rx) {
            Action::BackupList(BackupListAction::LoadFailed(message)) => {
                assert!(message.contains("Switch not found"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_fetch_snapshots_reports_both_with_ticket() {
        let (_runtime, mut mw, dispatcher, rx) = setup("secret");
        let mut state = AppState::default();
        state.compare.select_source("sw1", "backups/sw1/a.txt");
        state.compare.select_target("backups/sw1/b.txt").unwrap();
        let request = state.compare.confirm().unwrap();

        mw.handle(
            &Action::event(Event::Compare(CompareEvent::FetchSnapshots(request.clone()))),
            &state,
            &dispatcher,
        );

        match next(&rx) {
            Action::Compare(CompareAction::Loaded {
                ticket,
                source,
                target,
            }) => {
                assert_eq!(ticket, request.ticket);
                let source = (*source).unwrap();
                let target = (*target).unwrap();
                assert_eq!(source.text(), "hostname sw1\n! backups/sw1/a.txt\n");
                assert_eq!(target.filename, "b.txt");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_second_backup_is_refused() {
        let (_runtime, mut mw, dispatcher, rx) = setup("secret");
        let mut state = AppState::default();
        state.devices.backup_running = Some(0);

        let forwarded = mw.handle(
            &Action::DeviceList(DeviceListAction::TriggerBackup(device())),
            &state,
            &dispatcher,
        );
        assert!(!forwarded);
        assert!(matches!(next(&rx), Action::Status(m) if m.kind == StatusKind::Error));

        state.devices.backup_running = None;
        state.devices.bulk_backup_running = true;
        let forwarded = mw.handle(
            &Action::DeviceList(DeviceListAction::TriggerBackup(device())),
            &state,
            &dispatcher,
        );
        assert!(!forwarded);
    }

    #[test]
    fn test_backup_all_reports_and_reloads() {
        let (_runtime, mut mw, dispatcher, rx) = setup("secret");
        let mut state = AppState::default();
        assert!(mw.handle(
            &Action::DeviceList(DeviceListAction::BackupAll),
            &state,
            &dispatcher
        ));

        let running = match next(&rx) {
            Action::Status(message) => message,
            other => panic!("unexpected {:?}", other),
        };
        assert_eq!(running.operation.as_deref(), Some("backup-all"));
        let outcome = match next(&rx) {
            Action::DeviceList(DeviceListAction::BackupAllFinished(outcome)) => outcome,
            other => panic!("unexpected {:?}", other),
        };

        state.screen = Screen::Backups;
        state.backups.device = Some(device());
        mw.handle(
            &Action::DeviceList(DeviceListAction::BackupAllFinished(outcome)),
            &state,
            &dispatcher,
        );

        let mut status = StatusBarState::default();
        status.report(running);
        match next(&rx) {
            Action::Status(message) => status.report(message),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(status.pending(), 0);
        assert_eq!(
            status.latest().map(|m| m.message.as_str()),
            Some("Backed up 1/2 devices, failed: sw2 (Authentication failed)")
        );
        assert!(matches!(next(&rx), Action::DeviceList(DeviceListAction::Load)));
        assert!(matches!(next(&rx), Action::BackupList(BackupListAction::Load(_))));
    }

    #[test]
    fn test_backup_all_refused_while_backing_up() {
        let (_runtime, mut mw, dispatcher, rx) = setup("secret");
        let mut state = AppState::default();
        state.devices.backup_running = Some(0);

        let forwarded = mw.handle(
            &Action::DeviceList(DeviceListAction::BackupAll),
            &state,
            &dispatcher,
        );
        assert!(!forwarded);
        match next(&rx) {
            Action::Status(message) => assert_eq!(message.message, "A backup is already running"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_activity_log_open_loads_lines() {
        let (_runtime, mut mw, dispatcher, rx) = setup("secret");
        mw.handle(
            &Action::ActivityLog(ActivityLogAction::Open),
            &AppState::default(),
            &dispatcher,
        );

        match next(&rx) {
            Action::ActivityLog(ActivityLogAction::Loaded(lines)) => {
                assert_eq!(lines, vec!["2024-05-01 10:00:00 - INFO - Login".to_string()]);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_bulk_backup_messages() {
        let all_ok = BulkBackupResult {
            count: 2,
            results: vec![],
            ..bulk_result()
        };
        let (status, activity) = bulk_backup_messages(&Ok(all_ok));
        assert_eq!(status.kind, StatusKind::Success);
        assert_eq!(status.message, "Backup completed for 2 devices");
        assert_eq!(activity, "Console: backup of all devices completed, 2/2 saved");

        let (status, activity) = bulk_backup_messages(&Err("No devices configured".into()));
        assert_eq!(status.kind, StatusKind::Error);
        assert_eq!(status.operation.as_deref(), Some("backup-all"));
        assert_eq!(activity, "Console: backup of all devices failed: No devices configured");
    }

    #[test]
    fn test_backup_messages() {
        let ok = Ok(BackupResult {
            success: true,
            filename: Some("sw1_20240501.txt".into()),
            ..BackupResult::default()
        });
        let (status, activity) = backup_messages("sw1", &ok);
        assert_eq!(activity, "Console: backup of sw1 saved to sw1_20240501.txt");
        assert_eq!(status.operation.as_deref(), Some("backup:sw1"));

        let failed = Ok(BackupResult {
            success: false,
            message: Some("Authentication failed".into()),
            ..BackupResult::default()
        });
        let (_, activity) = backup_messages("sw1", &failed);
        assert_eq!(activity, "Console: backup of sw1 failed: Authentication failed");
    }
}
