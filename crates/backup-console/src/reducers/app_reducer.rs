use crate::actions::{Action, ActivityLogAction, BackupListAction, GlobalAction};
use crate::reducers::activity_log_reducer::reduce_activity_log;
use crate::reducers::backup_list_reducer::reduce_backup_list;
use crate::reducers::compare_reducer::reduce_compare;
use crate::reducers::device_list_reducer::reduce_device_list;
use crate::state::{AppState, Screen};
use config_compare::CompareAction;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that orchestrates all sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Global(GlobalAction::Quit) => {
            state.running = false;
        }
        Action::Global(GlobalAction::Tick) => {
            state = reduce_compare(state, &CompareAction::Tick);
        }
        Action::Global(GlobalAction::KeyPressed(_)) => {
            // Translated by KeyboardMiddleware
        }

        Action::DeviceList(action) => {
            state.devices = reduce_device_list(state.devices, action);
        }

        Action::BackupList(action) => {
            match action {
                // Reloads after a backup must not leave an open comparison
                BackupListAction::Load(_) if state.screen == Screen::Devices => {
                    state.screen = Screen::Backups
                }
                BackupListAction::Close => {
                    // A selection only makes sense within one device
                    state.compare.close();
                    state.screen = Screen::Devices;
                }
                _ => {}
            }
            state.backups = reduce_backup_list(state.backups, action);
        }

        Action::Compare(action) => {
            state = reduce_compare(state, action);
        }

        Action::ActivityLog(action) => {
            match action {
                ActivityLogAction::Open => {
                    state.activity_log.open(state.screen);
                    state.screen = Screen::ActivityLog;
                }
                ActivityLogAction::Close => state.screen = state.activity_log.return_to,
                _ => {}
            }
            state.activity_log = reduce_activity_log(state.activity_log, action);
        }

        Action::Status(message) => state.status_bar.report(message.clone()),

        Action::Event(_) | Action::None => {}
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{StatusKind, StatusMessage};
    use backup_client::Device;
    use pretty_assertions::assert_eq;

    fn device() -> Device {
        Device {
            index: 3,
            hostname: "dist-sw4".to_string(),
            ip: "10.0.3.1".to_string(),
            username: "admin".to_string(),
            device_type: "cisco_ios".to_string(),
            last_backup_status: Some("success".to_string()),
            last_backup_time: Some("2024-05-01 10:00:00".to_string()),
        }
    }

    #[test]
    fn test_quit_stops_running() {
        let state = reduce(AppState::default(), &Action::Global(GlobalAction::Quit));
        assert!(!state.running);
    }

    #[test]
    fn test_backup_screen_navigation() {
        let state = reduce(
            AppState::default(),
            &Action::BackupList(BackupListAction::Load(device())),
        );
        assert_eq!(state.screen, Screen::Backups);
        assert_eq!(state.backups.hostname(), "dist-sw4");

        let state = reduce(
            state,
            &Action::Compare(CompareAction::SelectSource {
                device_name: "dist-sw4".into(),
                path: "backups/dist-sw4/a.txt".into(),
            }),
        );
        assert_eq!(state.compare.source_path(), Some("backups/dist-sw4/a.txt"));

        let state = reduce(state, &Action::BackupList(BackupListAction::Close));
        assert_eq!(state.screen, Screen::Devices);
        assert_eq!(state.compare.source_path(), None);
    }

    #[test]
    fn test_backup_outcome_settles_running_status() {
        let state = reduce(
            AppState::default(),
            &Action::Status(
                StatusMessage::running("Backing up dist-sw4", "backup").for_operation("backup:dist-sw4"),
            ),
        );
        let state = reduce(
            state,
            &Action::Status(StatusMessage::error("Connection refused", "devices")),
        );
        let state = reduce(
            state,
            &Action::Status(
                StatusMessage::success("dist-sw4 saved", "backup").for_operation("backup:dist-sw4"),
            ),
        );

        let latest = state.status_bar.latest().unwrap();
        assert_eq!(latest.kind, StatusKind::Success);
        assert_eq!(state.status_bar.messages.len(), 2);
        assert_eq!(state.status_bar.pending(), 0);
    }

    #[test]
    fn test_activity_log_returns_to_opening_screen() {
        let state = reduce(
            AppState::default(),
            &Action::BackupList(BackupListAction::Load(device())),
        );
        let state = reduce(state, &Action::ActivityLog(ActivityLogAction::Open));
        assert_eq!(state.screen, Screen::ActivityLog);
        assert!(state.activity_log.loading);

        let state = reduce(
            state,
            &Action::ActivityLog(ActivityLogAction::Loaded(vec!["line".into()])),
        );
        let state = reduce(state, &Action::ActivityLog(ActivityLogAction::Close));
        assert_eq!(state.screen, Screen::Backups);
    }

    #[test]
    fn test_events_do_not_change_state() {
        let state = reduce(
            AppState::default(),
            &Action::event(crate::actions::Event::LoggedIn),
        );
        assert_eq!(state.screen, Screen::Devices);
        assert!(state.outbox.is_empty());
    }
}
