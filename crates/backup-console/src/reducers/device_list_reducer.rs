//! Device List Reducer

use crate::actions::DeviceListAction;
use crate::state::DeviceListState;

/// Reducer for device list actions.
pub fn reduce_device_list(mut state: DeviceListState, action: &DeviceListAction) -> DeviceListState {
    match action {
        // === Loading ===
        DeviceListAction::Load => {
            state.loading = true;
            state.error = None;
        }
        DeviceListAction::Loaded(devices) => {
            state.devices = devices.clone();
            state.loading = false;
            state.clamp_cursor();
        }
        DeviceListAction::LoadFailed(error) => {
            state.loading = false;
            state.error = Some(error.clone());
        }

        // === Navigation ===
        DeviceListAction::NavigateNext => state.move_cursor(1),
        DeviceListAction::NavigatePrevious => state.move_cursor(-1),
        DeviceListAction::NavigateToTop => state.to_top(),
        DeviceListAction::NavigateToBottom => state.to_bottom(),

        // === Filter ===
        DeviceListAction::FilterStart => state.filter_editing = true,
        DeviceListAction::FilterEnd => state.filter_editing = false,
        DeviceListAction::FilterChar(c) => {
            state.filter.push(*c);
            state.cursor = 0;
        }
        DeviceListAction::FilterBackspace => {
            state.filter.pop();
            state.clamp_cursor();
        }
        DeviceListAction::FilterClear => {
            state.filter.clear();
            state.filter_editing = false;
            state.clamp_cursor();
        }

        DeviceListAction::SortBy(column) => state.sort_by(*column),

        // === Operations ===
        DeviceListAction::TriggerBackup(device) => {
            if !state.backup_in_progress() {
                state.backup_running = Some(device.index);
            }
        }
        DeviceListAction::BackupAll => {
            if !state.backup_in_progress() {
                state.bulk_backup_running = true;
            }
        }
        DeviceListAction::BackupAllFinished(_) => state.bulk_backup_running = false,
        DeviceListAction::BackupFinished { device_index, .. } => {
            if state.backup_running == Some(*device_index) {
                state.backup_running = None;
            }
        }

        // Handled by middleware
        DeviceListAction::OpenBackups => {}
    }
    state
}
