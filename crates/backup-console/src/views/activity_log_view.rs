//! Activity Log View
//!
//! The backend's activity log, one colored line per entry.

use crate::state::{AppState, LogLevel};
use crate::theme::{CompareThemeAdapter, Theme};
use config_compare::{hint_line, FooterHint};
use ratatui::{prelude::*, widgets::*};

/// Takes the state mutably to record the viewport height for paging.
pub fn render(state: &mut AppState, area: Rect, f: &mut Frame) {
    let height = area.height.saturating_sub(2) as usize;
    state.activity_log.set_viewport(height);

    let theme = &state.theme;
    let log = &state.activity_log;

    let hints = vec![
        FooterHint::new("j/k", "Scroll"),
        FooterHint::new("g/G", "Top/Bottom"),
        FooterHint::new("r", "Reload"),
        FooterHint::new("Esc", "Back"),
    ];
    let adapter = CompareThemeAdapter(theme);

    let title = if log.loading {
        " Activity log (loading…) ".to_string()
    } else if log.lines.is_empty() {
        " Activity log ".to_string()
    } else {
        let last = (log.scroll + height).min(log.lines.len());
        format!(
            " Activity log ({}-{} of {}) ",
            log.scroll + 1,
            last,
            log.lines.len()
        )
    };
    let block = Block::bordered()
        .title(Span::styled(title, theme.title()))
        .title_bottom(hint_line(&hints, &adapter))
        .border_style(Style::default().fg(theme.accent_primary))
        .style(Style::default().bg(theme.bg_panel));

    if let Some(error) = &log.error {
        let message = Paragraph::new(error.as_str())
            .style(Style::default().fg(theme.status_error))
            .wrap(Wrap { trim: true })
            .block(block);
        f.render_widget(message, area);
        return;
    }
    if log.lines.is_empty() && !log.loading {
        let empty = Paragraph::new("The activity log is empty")
            .style(theme.muted())
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let lines: Vec<Line> = log
        .lines
        .iter()
        .skip(log.scroll)
        .take(height)
        .map(|line| Line::styled(line.as_str(), line_style(line, theme)))
        .collect();
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn line_style(line: &str, theme: &Theme) -> Style {
    let fg = match LogLevel::classify(line) {
        LogLevel::Error => theme.status_error,
        LogLevel::Warning => theme.status_warning,
        LogLevel::Success => theme.status_success,
        LogLevel::Plain => theme.text_primary,
    };
    Style::default().fg(fg)
}
