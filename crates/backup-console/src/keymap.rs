//! Key translation
//!
//! Maps a key press to the action it means on the active screen. Input
//! fields (device filter, compare search) take printable keys while focused.

use crate::actions::{Action, ActivityLogAction, BackupListAction, DeviceListAction, GlobalAction};
use crate::state::{AppState, Screen, SortColumn};
use config_compare::{Classification, CompareAction, Comparison};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Translate a key press for the active screen
pub fn translate(key: KeyEvent, state: &AppState) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Global(GlobalAction::Quit));
    }

    match state.screen {
        Screen::Devices if state.devices.filter_editing => {
            devices_key(key, state).map(Action::DeviceList)
        }
        Screen::Devices => match key.code {
            KeyCode::Char('q') => Some(Action::Global(GlobalAction::Quit)),
            KeyCode::Char('L') => Some(Action::ActivityLog(ActivityLogAction::Open)),
            _ => devices_key(key, state).map(Action::DeviceList),
        },
        Screen::Backups => backups_key(key, state),
        Screen::Compare => match state.compare.comparison() {
            Some(cmp) => compare_key(key, cmp).map(Action::Compare),
            None => None,
        },
        Screen::ActivityLog => log_key(key).map(Action::ActivityLog),
    }
}

fn devices_key(key: KeyEvent, state: &AppState) -> Option<DeviceListAction> {
    let devices = &state.devices;

    if devices.filter_editing {
        return match key.code {
            KeyCode::Esc => Some(DeviceListAction::FilterClear),
            KeyCode::Enter => Some(DeviceListAction::FilterEnd),
            KeyCode::Backspace => Some(DeviceListAction::FilterBackspace),
            KeyCode::Down => Some(DeviceListAction::NavigateNext),
            KeyCode::Up => Some(DeviceListAction::NavigatePrevious),
            KeyCode::Char(c) => Some(DeviceListAction::FilterChar(c)),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => Some(DeviceListAction::NavigateNext),
        KeyCode::Char('k') | KeyCode::Up => Some(DeviceListAction::NavigatePrevious),
        KeyCode::Char('g') | KeyCode::Home => Some(DeviceListAction::NavigateToTop),
        KeyCode::Char('G') | KeyCode::End => Some(DeviceListAction::NavigateToBottom),
        KeyCode::Char('/') => Some(DeviceListAction::FilterStart),
        KeyCode::Esc if !devices.filter.is_empty() => Some(DeviceListAction::FilterClear),
        KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => {
            Some(DeviceListAction::OpenBackups)
        }
        KeyCode::Char('b') => devices
            .selected()
            .map(|d| DeviceListAction::TriggerBackup(d.clone())),
        KeyCode::Char('A') => Some(DeviceListAction::BackupAll),
        KeyCode::Char(c @ '1'..='4') => SortColumn::from_digit(c).map(DeviceListAction::SortBy),
        KeyCode::Char('r') => Some(DeviceListAction::Load),
        _ => None,
    }
}

fn backups_key(key: KeyEvent, state: &AppState) -> Option<Action> {
    let backups = &state.backups;
    let selected = backups.selected();

    let action = match key.code {
        KeyCode::Char('j') | KeyCode::Down => BackupListAction::NavigateNext,
        KeyCode::Char('k') | KeyCode::Up => BackupListAction::NavigatePrevious,
        KeyCode::Char('g') | KeyCode::Home => BackupListAction::NavigateToTop,
        KeyCode::Char('G') | KeyCode::End => BackupListAction::NavigateToBottom,
        KeyCode::Enter | KeyCode::Char('p') => BackupListAction::Preview,
        KeyCode::Char('r') => BackupListAction::Load(backups.device.clone()?),
        KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('h') | KeyCode::Left => {
            BackupListAction::Close
        }

        KeyCode::Char('s') => {
            return Some(Action::Compare(CompareAction::SelectSource {
                device_name: backups.hostname().to_string(),
                path: selected?.path.clone(),
            }))
        }
        KeyCode::Char('t') => {
            return Some(Action::Compare(CompareAction::SelectTarget {
                path: selected?.path.clone(),
            }))
        }
        KeyCode::Char('c') => return Some(Action::Compare(CompareAction::Confirm)),
        KeyCode::Char('L') => return Some(Action::ActivityLog(ActivityLogAction::Open)),
        KeyCode::Char('b') => {
            return Some(Action::DeviceList(DeviceListAction::TriggerBackup(
                backups.device.clone()?,
            )))
        }
        _ => return None,
    };
    Some(Action::BackupList(action))
}

fn log_key(key: KeyEvent) -> Option<ActivityLogAction> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('f') if ctrl => Some(ActivityLogAction::PageDown),
        KeyCode::Char('b') if ctrl => Some(ActivityLogAction::PageUp),
        KeyCode::Char('j') | KeyCode::Down => Some(ActivityLogAction::ScrollDown),
        KeyCode::Char('k') | KeyCode::Up => Some(ActivityLogAction::ScrollUp),
        KeyCode::PageDown | KeyCode::Char(' ') => Some(ActivityLogAction::PageDown),
        KeyCode::PageUp => Some(ActivityLogAction::PageUp),
        KeyCode::Char('g') | KeyCode::Home => Some(ActivityLogAction::ScrollTop),
        KeyCode::Char('G') | KeyCode::End => Some(ActivityLogAction::ScrollBottom),
        KeyCode::Char('r') => Some(ActivityLogAction::Open),
        KeyCode::Char('q') | KeyCode::Esc => Some(ActivityLogAction::Close),
        _ => None,
    }
}

fn compare_key(key: KeyEvent, cmp: &Comparison) -> Option<CompareAction> {
    if cmp.search_editing {
        return match key.code {
            KeyCode::Esc => Some(CompareAction::CancelSearch),
            KeyCode::Enter => Some(CompareAction::SubmitSearch),
            KeyCode::Backspace => Some(CompareAction::SearchBackspace),
            KeyCode::Delete => Some(CompareAction::SearchDelete),
            KeyCode::Left => Some(CompareAction::SearchCursorLeft),
            KeyCode::Right => Some(CompareAction::SearchCursorRight),
            KeyCode::Home => Some(CompareAction::SearchCursorHome),
            KeyCode::End => Some(CompareAction::SearchCursorEnd),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(CompareAction::SearchClear)
            }
            KeyCode::Char(c) => Some(CompareAction::SearchInsertChar(c)),
            _ => None,
        };
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('f') if ctrl => Some(CompareAction::ScrollPageDown),
        KeyCode::Char('b') if ctrl => Some(CompareAction::ScrollPageUp),
        KeyCode::Char('j') | KeyCode::Down => Some(CompareAction::ScrollDown),
        KeyCode::Char('k') | KeyCode::Up => Some(CompareAction::ScrollUp),
        KeyCode::PageDown | KeyCode::Char(' ') => Some(CompareAction::ScrollPageDown),
        KeyCode::PageUp => Some(CompareAction::ScrollPageUp),
        KeyCode::Char('g') | KeyCode::Home => Some(CompareAction::ScrollTop),
        KeyCode::Char('G') | KeyCode::End => Some(CompareAction::ScrollBottom),
        KeyCode::Tab | KeyCode::Char('h') | KeyCode::Char('l') | KeyCode::Left | KeyCode::Right => {
            Some(CompareAction::SwitchPanel)
        }
        KeyCode::Char('/') => Some(CompareAction::StartSearch),
        KeyCode::Char('a') | KeyCode::Char('1') => {
            Some(CompareAction::ToggleFilter(Classification::Added))
        }
        KeyCode::Char('r') | KeyCode::Char('2') => {
            Some(CompareAction::ToggleFilter(Classification::Removed))
        }
        KeyCode::Char('u') | KeyCode::Char('3') => {
            Some(CompareAction::ToggleFilter(Classification::Unchanged))
        }
        KeyCode::Char('q') | KeyCode::Esc => Some(CompareAction::Close),
        _ => None,
    }
}
