//! Device List View
//!
//! Table of managed devices with their last backup state and a filter line.
//! The sort column carries ▲/▼ in the header.

use crate::state::{AppState, DeviceListState, SortColumn};
use crate::theme::{CompareThemeAdapter, Theme};
use backup_client::{BackupState, Device};
use config_compare::{hint_line, FooterHint};
use ratatui::{prelude::*, widgets::*};

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let devices = &state.devices;

    let show_filter = devices.filter_editing || !devices.filter.is_empty();
    let [filter_area, table_area] = Layout::vertical([
        Constraint::Length(if show_filter { 1 } else { 0 }),
        Constraint::Min(0),
    ])
    .areas(area);

    if show_filter {
        let cursor = if devices.filter_editing { "█" } else { "" };
        let filter = Line::from(vec![
            Span::styled(" Filter: ", theme.muted()),
            Span::styled(
                format!("{}{}", devices.filter, cursor),
                Style::default().fg(theme.text_primary),
            ),
        ]);
        f.render_widget(Paragraph::new(filter), filter_area);
    }

    let hints = footer_hints(state);
    let adapter = CompareThemeAdapter(theme);
    let filtered = devices.filtered();
    let title = if devices.loading {
        " Devices (loading…) ".to_string()
    } else {
        format!(" Devices ({}/{}) ", filtered.len(), devices.devices.len())
    };
    let mut title = vec![Span::styled(title, theme.title())];
    if devices.bulk_backup_running {
        title.push(Span::styled(
            "Backing up all devices… ",
            Style::default().fg(theme.status_warning),
        ));
    }
    let block = Block::bordered()
        .title(Line::from(title))
        .title_bottom(hint_line(&hints, &adapter))
        .border_style(Style::default().fg(theme.accent_primary))
        .style(Style::default().bg(theme.bg_panel));

    if let Some(error) = &devices.error {
        let message = Paragraph::new(error.as_str())
            .style(Style::default().fg(theme.status_error))
            .wrap(Wrap { trim: true })
            .block(block);
        f.render_widget(message, table_area);
        return;
    }

    let header = Row::new([
        String::new(),
        column_title(devices, SortColumn::Hostname),
        column_title(devices, SortColumn::Ip),
        column_title(devices, SortColumn::Username),
        column_title(devices, SortColumn::DeviceType),
        "Last backup".to_string(),
    ])
    .style(Style::default().fg(theme.table_header_fg).add_modifier(Modifier::BOLD));
    let rows = filtered
        .iter()
        .map(|device| device_row(device, devices.is_backing_up(device.index), theme));
    let table = Table::new(
        rows,
        [
            Constraint::Length(2),
            Constraint::Percentage(22),
            Constraint::Length(17),
            Constraint::Length(12),
            Constraint::Length(15),
            Constraint::Min(20),
        ],
    )
    .header(header)
    .row_highlight_style(theme.selected())
    .block(block);

    let mut table_state = TableState::default().with_selected(Some(devices.cursor));
    f.render_stateful_widget(table, table_area, &mut table_state);
}

/// Header label with its number key and, for the sort column, the direction
fn column_title(devices: &DeviceListState, column: SortColumn) -> String {
    let (digit, label) = match column {
        SortColumn::Hostname => (1, "Hostname"),
        SortColumn::Ip => (2, "IP"),
        SortColumn::Username => (3, "User"),
        SortColumn::DeviceType => (4, "Type"),
    };
    match devices.sort {
        Some(sort) if sort.column == column => {
            format!("{} {}{}", digit, label, if sort.ascending { " ▲" } else { " ▼" })
        }
        _ => format!("{} {}", digit, label),
    }
}

fn device_row<'a>(device: &'a Device, backing_up: bool, theme: &Theme) -> Row<'a> {
    let (icon, color) = if backing_up {
        ("⏳", theme.status_warning)
    } else {
        match device.backup_state() {
            BackupState::Never => ("○", theme.text_muted),
            BackupState::Success => ("●", theme.status_success),
            BackupState::Failed => ("●", theme.status_error),
            BackupState::Unknown => ("?", theme.status_warning),
        }
    };

    Row::new([
        Cell::from(Span::styled(icon, Style::default().fg(color))),
        Cell::from(device.hostname.as_str()),
        Cell::from(device.ip.as_str()),
        Cell::from(device.username.as_str()),
        Cell::from(device.device_type.as_str()),
        Cell::from(Span::styled(device.backup_summary(), Style::default().fg(color))),
    ])
    .style(Style::default().fg(theme.text_primary))
}

fn footer_hints(state: &AppState) -> Vec<FooterHint> {
    if state.devices.filter_editing {
        vec![
            FooterHint::new("Enter", "Apply"),
            FooterHint::new("Esc", "Clear"),
        ]
    } else {
        vec![
            FooterHint::new("Enter", "Backups"),
            FooterHint::new("b", "Backup now"),
            FooterHint::new("A", "Backup all"),
            FooterHint::new("1-4", "Sort"),
            FooterHint::new("/", "Filter"),
            FooterHint::new("L", "Log"),
            FooterHint::new("r", "Reload"),
            FooterHint::new("q", "Quit"),
        ]
    }
}
