//! Application State

use super::{ActivityLogState, BackupListState, DeviceListState, StatusBarState};
use crate::actions::Event;
use crate::theme::Theme;
use config_compare::CompareSessionController;

/// Screen shown in the main area
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Devices,
    Backups,
    Compare,
    ActivityLog,
}

/// Application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub running: bool,
    pub screen: Screen,
    pub devices: DeviceListState,
    pub backups: BackupListState,
    /// Selection and, once open, the comparison itself
    pub compare: CompareSessionController,
    pub activity_log: ActivityLogState,
    pub status_bar: StatusBarState,
    pub theme: Theme,
    /// Events raised while reducing. The main loop drains them back into the
    /// middleware chain.
    pub outbox: Vec<Event>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            running: true,
            screen: Screen::default(),
            devices: DeviceListState::default(),
            backups: BackupListState::default(),
            compare: CompareSessionController::new(),
            activity_log: ActivityLogState::default(),
            status_bar: StatusBarState::default(),
            theme: Theme::default(),
            outbox: Vec::new(),
        }
    }
}

impl AppState {
    /// Take the events raised since the last call
    pub fn take_outbox(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.outbox)
    }
}
