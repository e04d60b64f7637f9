//! Actions module
//!
//! This module defines all actions in the application using a tagged action
//! architecture. Actions are organized by:
//! - Events that re-enter the middleware chain
//! - Global actions that affect the entire application
//! - Screen-specific actions that are already targeted to a particular screen

pub mod activity_log;
pub mod backup_list;
pub mod device_list;
pub mod event;
pub mod global;

pub use activity_log::ActivityLogAction;
pub use backup_list::{BackupListAction, Preview};
pub use device_list::DeviceListAction;
pub use event::Event;
pub use global::GlobalAction;

use crate::state::StatusMessage;

use config_compare::CompareAction;

/// Root action enum - tagged by screen/domain
#[derive(Debug, Clone)]
pub enum Action {
    /// Facts that re-enter the middleware chain and never reach reducers.
    /// Use `Action::event(Event::X)` to create.
    Event(Event),

    /// Global application actions
    Global(GlobalAction),

    /// Device list screen actions
    DeviceList(DeviceListAction),
    /// Backup list screen actions
    BackupList(BackupListAction),
    /// Comparison session actions, handled by the config-compare controller
    Compare(CompareAction),
    /// Activity log screen actions
    ActivityLog(ActivityLogAction),
    /// A status report; settles the pending message of its operation
    Status(StatusMessage),

    /// No-op action
    None,
}

impl Action {
    /// Factory method for creating events.
    ///
    /// Makes event creation visually distinct at the call site, signaling
    /// that the action will re-enter the middleware chain.
    pub fn event(event: Event) -> Self {
        Self::Event(event)
    }

    /// Actions that fire too often to be worth a log line
    pub fn is_noisy(&self) -> bool {
        matches!(
            self,
            Action::Global(GlobalAction::Tick) | Action::Compare(CompareAction::Tick)
        )
    }
}
