//! Compare Screen
//!
//! Hosts the side-by-side comparison of two backups.

use crate::state::AppState;
use crate::theme::{CompareThemeAdapter, Theme};
use config_compare::{CompareView, FooterHint};
use ratatui::{prelude::*, widgets::*};

pub fn render(state: &mut AppState, area: Rect, f: &mut Frame) {
    let AppState { theme, compare, .. } = state;
    let theme: &Theme = theme;
    let adapter = CompareThemeAdapter(theme);

    let Some(cmp) = compare.comparison_mut() else {
        let waiting = Paragraph::new("Loading comparison…")
            .style(theme.muted())
            .alignment(Alignment::Center)
            .block(Block::bordered().border_style(Style::default().fg(theme.text_muted)));
        f.render_widget(waiting, area);
        return;
    };

    let hints = footer_hints(cmp.search_editing);
    CompareView::new(&adapter)
        .with_footer_hints(hints)
        .render_with_state(area, f.buffer_mut(), cmp);
}

fn footer_hints(search_editing: bool) -> Vec<FooterHint> {
    if search_editing {
        vec![
            FooterHint::new("Enter", "Search"),
            FooterHint::new("^U", "Clear"),
            FooterHint::new("Esc", "Cancel"),
        ]
    } else {
        vec![
            FooterHint::new("j/k", "Scroll"),
            FooterHint::new("Tab", "Panel"),
            FooterHint::new("/", "Search"),
            FooterHint::new("a/r/u", "Filter"),
            FooterHint::new("q", "Close"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducers::compare_reducer::reduce_compare;
    use crate::state::Screen;
    use config_compare::{CompareAction, ConfigSnapshot};
    use ratatui::backend::TestBackend;

    fn opened_state() -> AppState {
        let mut state = AppState::default();
        state.compare.select_source("core-sw1", "backups/core-sw1/old.txt");
        state.compare.select_target("backups/core-sw1/new.txt").unwrap();
        let request = state.compare.confirm().unwrap();
        let state = reduce_compare(
            state,
            &CompareAction::Loaded {
                ticket: request.ticket,
                source: Box::new(Ok(ConfigSnapshot::new(
                    "backups/core-sw1/old.txt",
                    "hostname core-sw1\nvlan 10\n",
                ))),
                target: Box::new(Ok(ConfigSnapshot::new(
                    "backups/core-sw1/new.txt",
                    "hostname core-sw1\nvlan 20\n",
                ))),
            },
        );
        assert_eq!(state.screen, Screen::Compare);
        state
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_both_snapshots() {
        let mut state = opened_state();
        let mut terminal = Terminal::new(TestBackend::new(100, 16)).unwrap();
        terminal
            .draw(|f| render(&mut state, f.area(), f))
            .unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("core-sw1"));
        assert!(text.contains("old.txt"));
        assert!(text.contains("new.txt"));
        assert!(text.contains("vlan 10"));
        assert!(text.contains("vlan 20"));
    }

    #[test]
    fn test_without_comparison_shows_placeholder() {
        let mut state = AppState::default();
        let mut terminal = Terminal::new(TestBackend::new(60, 5)).unwrap();
        terminal
            .draw(|f| render(&mut state, f.area(), f))
            .unwrap();
        assert!(screen_text(&terminal).contains("Loading comparison"));
    }
}
