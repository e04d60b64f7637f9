//! Backup List Reducer

use crate::actions::BackupListAction;
use crate::state::BackupListState;

/// Reducer for backup list actions.
///
/// Results for a device other than the listed one are stale and dropped.
pub fn reduce_backup_list(mut state: BackupListState, action: &BackupListAction) -> BackupListState {
    match action {
        // === Loading ===
        BackupListAction::Load(device) => {
            state.reset_for(device.clone());
        }
        BackupListAction::Loaded {
            device_index,
            backups,
        } => {
            if state.device.as_ref().map(|d| d.index) == Some(*device_index) {
                state.backups = backups.clone();
                state.loading = false;
                state.error = None;
                state.cursor = 0;
            } else {
                log::debug!("Dropping backups of device {}: no longer listed", device_index);
            }
        }
        BackupListAction::LoadFailed(error) => {
            state.loading = false;
            state.error = Some(error.clone());
        }

        // === Navigation ===
        BackupListAction::NavigateNext => state.move_cursor(1),
        BackupListAction::NavigatePrevious => state.move_cursor(-1),
        BackupListAction::NavigateToTop => state.to_top(),
        BackupListAction::NavigateToBottom => state.to_bottom(),

        // === Preview ===
        BackupListAction::Preview => {
            state.preview_loading = state.selected().map(|b| b.path.clone());
        }
        BackupListAction::PreviewLoaded { path, preview } => {
            if state.preview_loading.as_deref() == Some(path.as_str()) {
                state.preview = Some((path.clone(), preview.clone()));
                state.preview_loading = None;
            }
        }

        // Screen change is handled by the app reducer
        BackupListAction::Close => {}
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::Preview;
    use backup_client::{BackupEntry, Device};
    use pretty_assertions::assert_eq;

    fn device(index: usize) -> Device {
        Device {
            index,
            hostname: format!("sw{}", index),
            ip: "10.0.0.1".to_string(),
            username: "admin".to_string(),
            device_type: "cisco_ios".to_string(),
            last_backup_status: None,
            last_backup_time: None,
        }
    }

    fn entry(name: &str) -> BackupEntry {
        BackupEntry {
            filename: name.to_string(),
            path: format!("backups/sw1/{}", name),
        }
    }

    fn listed() -> BackupListState {
        let state = reduce_backup_list(
            BackupListState::default(),
            &BackupListAction::Load(device(1)),
        );
        reduce_backup_list(
            state,
            &BackupListAction::Loaded {
                device_index: 1,
                backups: vec![entry("new.txt"), entry("old.txt")],
            },
        )
    }

    #[test]
    fn test_load_resets_previous_device() {
        let mut state = listed();
        state.cursor = 1;
        let state = reduce_backup_list(state, &BackupListAction::Load(device(2)));
        assert!(state.loading);
        assert!(state.backups.is_empty());
        assert_eq!(state.cursor, 0);
        assert_eq!(state.hostname(), "sw2");
    }

    #[test]
    fn test_stale_backups_are_dropped() {
        let state = reduce_backup_list(
            BackupListState::default(),
            &BackupListAction::Load(device(2)),
        );
        let state = reduce_backup_list(
            state,
            &BackupListAction::Loaded {
                device_index: 1,
                backups: vec![entry("a.txt")],
            },
        );
        assert!(state.loading);
        assert!(state.backups.is_empty());
    }

    #[test]
    fn test_preview_only_for_requested_path() {
        let state = reduce_backup_list(listed(), &BackupListAction::NavigateNext);
        let state = reduce_backup_list(state, &BackupListAction::Preview);
        assert_eq!(state.preview_loading.as_deref(), Some("backups/sw1/old.txt"));

        let state = reduce_backup_list(
            state,
            &BackupListAction::PreviewLoaded {
                path: "backups/sw1/new.txt".into(),
                preview: Preview::Text("stale".into()),
            },
        );
        assert_eq!(state.preview, None);

        let state = reduce_backup_list(
            state,
            &BackupListAction::PreviewLoaded {
                path: "backups/sw1/old.txt".into(),
                preview: Preview::Text("hostname sw1".into()),
            },
        );
        assert_eq!(
            state.preview,
            Some((
                "backups/sw1/old.txt".to_string(),
                Preview::Text("hostname sw1".into())
            ))
        );
        assert_eq!(state.preview_loading, None);
    }
}
