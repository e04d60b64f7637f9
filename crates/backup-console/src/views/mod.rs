//! Screen rendering
//!
//! Each screen renders into the main area; the status bar takes the last row.

pub mod activity_log_view;
pub mod backup_list_view;
pub mod compare_screen;
pub mod device_list_view;
pub mod status_bar;

use crate::state::{AppState, Screen};
use crate::view_models::StatusBarViewModel;
use ratatui::{prelude::*, widgets::Block};
use status_bar::StatusBarWidget;

/// Render the whole application frame.
///
/// Takes the state mutably so the comparison and the activity log learn
/// their viewport height.
pub fn render(state: &mut AppState, area: Rect, f: &mut Frame) {
    f.render_widget(
        Block::default().style(Style::default().bg(state.theme.bg_primary)),
        area,
    );

    let [main_area, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    match state.screen {
        Screen::Devices => device_list_view::render(state, main_area, f),
        Screen::Backups => backup_list_view::render(state, main_area, f),
        Screen::Compare => compare_screen::render(state, main_area, f),
        Screen::ActivityLog => activity_log_view::render(state, main_area, f),
    }

    let status = StatusBarViewModel::from_state(state);
    f.render_widget(StatusBarWidget(&status), status_area);
}
