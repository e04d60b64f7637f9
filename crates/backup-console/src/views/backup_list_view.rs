//! Backup List View
//!
//! Stored backups of one device next to a preview of the selected one.
//! Backups picked for comparison are marked `S` (source) and `T` (target).

use crate::actions::Preview;
use crate::state::AppState;
use crate::theme::CompareThemeAdapter;
use config_compare::{filename_from_path, hint_line, FooterHint};
use ratatui::{prelude::*, widgets::*};

pub fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let [list_area, preview_area] =
        Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)]).areas(area);

    render_list(state, list_area, f);
    render_preview(state, preview_area, f);
}

fn render_list(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let backups = &state.backups;

    let hints = vec![
        FooterHint::new("s", "Source"),
        FooterHint::new("t", "Target"),
        FooterHint::new("c", "Compare"),
        FooterHint::new("Enter", "Preview"),
        FooterHint::new("b", "Backup now"),
        FooterHint::new("Esc", "Back"),
    ];
    let adapter = CompareThemeAdapter(theme);

    let mut title = vec![Span::styled(
        format!(" Backups: {} ({}) ", backups.hostname(), backups.backups.len()),
        theme.title(),
    )];
    if state.compare.is_loading() {
        title.push(Span::styled(
            "Loading comparison… ",
            Style::default().fg(theme.status_warning),
        ));
    }

    let block = Block::bordered()
        .title(Line::from(title))
        .title_bottom(hint_line(&hints, &adapter))
        .border_style(Style::default().fg(theme.accent_primary))
        .style(Style::default().bg(theme.bg_panel));

    if backups.loading {
        let loading = Paragraph::new("Loading backups…")
            .style(theme.muted())
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(loading, area);
        return;
    }
    if let Some(error) = &backups.error {
        let message = Paragraph::new(error.as_str())
            .style(Style::default().fg(theme.status_error))
            .wrap(Wrap { trim: true })
            .block(block);
        f.render_widget(message, area);
        return;
    }
    if backups.backups.is_empty() {
        let empty = Paragraph::new("No backups yet. Press 'b' to back up now.")
            .style(theme.muted())
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let source = state.compare.source_path();
    let target = state.compare.selection().map(|s| s.target_path.as_str());
    let items = backups.backups.iter().map(|entry| {
        let path = Some(entry.path.as_str());
        let marker = if path == source {
            Span::styled("S ", Style::default().fg(theme.status_info).add_modifier(Modifier::BOLD))
        } else if path == target {
            Span::styled("T ", Style::default().fg(theme.status_success).add_modifier(Modifier::BOLD))
        } else {
            Span::raw("  ")
        };
        ListItem::new(Line::from(vec![
            marker,
            Span::styled(entry.filename.as_str(), Style::default().fg(theme.text_primary)),
        ]))
    });

    let list = List::new(items)
        .highlight_style(theme.selected())
        .block(block);
    let mut list_state = ListState::default().with_selected(Some(backups.cursor));
    f.render_stateful_widget(list, area, &mut list_state);
}

fn render_preview(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;
    let backups = &state.backups;

    let (title, body) = match (&backups.preview_loading, &backups.preview) {
        (Some(path), _) => (
            filename_from_path(path).to_string(),
            Paragraph::new("Loading…").style(theme.muted()),
        ),
        (None, Some((path, Preview::Text(text)))) => (
            filename_from_path(path).to_string(),
            Paragraph::new(text.as_str()).style(Style::default().fg(theme.text_primary)),
        ),
        (None, Some((path, Preview::Unavailable(message)))) => (
            filename_from_path(path).to_string(),
            Paragraph::new(message.as_str())
                .style(Style::default().fg(theme.status_error))
                .wrap(Wrap { trim: true }),
        ),
        (None, None) => (
            "Preview".to_string(),
            Paragraph::new("Press Enter to preview the selected backup").style(theme.muted()),
        ),
    };

    let block = Block::bordered()
        .title(Span::styled(format!(" {} ", title), theme.title()))
        .border_style(Style::default().fg(theme.text_muted))
        .style(Style::default().bg(theme.bg_panel));
    f.render_widget(body.block(block), area);
}
