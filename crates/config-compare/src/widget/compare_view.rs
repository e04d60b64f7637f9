//! Composite comparison widget.

use super::panel::{footer_line, FooterHint, PanelWidget};
use crate::model::{Classification, Panel};
use crate::state::Comparison;
use crate::traits::ThemeProvider;
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

/// The side-by-side comparison view.
///
/// Combines a header (device and filter toggles), the two panels, a stats
/// line and the search input. Everything is projected from [`Comparison`];
/// the widget only writes back the viewport height it was given.
///
/// # Example
///
/// ```ignore
/// use config_compare::{CompareView, DefaultTheme};
///
/// let theme = DefaultTheme;
/// if let Some(cmp) = session.comparison_mut() {
///     CompareView::new(&theme).render_with_state(area, frame.buffer_mut(), cmp);
/// }
/// ```
pub struct CompareView<'a, T: ThemeProvider> {
    theme: &'a T,
    footer_hints: Vec<FooterHint>,
}

impl<'a, T: ThemeProvider> CompareView<'a, T> {
    pub fn new(theme: &'a T) -> Self {
        Self {
            theme,
            footer_hints: Vec::new(),
        }
    }

    /// Set footer hints shown under the panels.
    pub fn with_footer_hints(mut self, hints: Vec<FooterHint>) -> Self {
        self.footer_hints = hints;
        self
    }

    /// Render the comparison.
    pub fn render_with_state(self, area: Rect, buf: &mut Buffer, cmp: &mut Comparison) {
        let [header, body, stats, search] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .areas(area);

        // Panel borders take two rows.
        cmp.set_viewport_height(body.height.saturating_sub(2) as usize);

        self.render_header(header, buf, cmp);

        let [left, right] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(body);
        let line_no_width = cmp.panels.line_no_width();
        PanelWidget::new(
            &cmp.panels.left,
            &cmp.source.filename,
            cmp.scroll.offset(Panel::Left),
            line_no_width,
            self.theme,
            cmp.focused == Panel::Left,
        )
        .render(left, buf);
        PanelWidget::new(
            &cmp.panels.right,
            &cmp.target.filename,
            cmp.scroll.offset(Panel::Right),
            line_no_width,
            self.theme,
            cmp.focused == Panel::Right,
        )
        .with_footer_hints(&self.footer_hints)
        .render(right, buf);

        self.render_stats(stats, buf, cmp);
        self.render_search(search, buf, cmp);
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer, cmp: &Comparison) {
        let mut spans = vec![Span::styled(
            format!(" {} ", cmp.selection.device_name),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        for classification in Classification::ALL {
            let checked = if cmp.filter.is_visible(classification) {
                "[x]"
            } else {
                "[ ]"
            };
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                format!("{} {}", checked, classification.label()),
                Style::default().fg(self.theme.marker_foreground(classification)),
            ));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }

    fn render_stats(&self, area: Rect, buf: &mut Buffer, cmp: &Comparison) {
        let stats = &cmp.stats;
        let sep = || Span::styled(" │ ", Style::default().fg(self.theme.hint_text_foreground()));
        let mut spans = vec![
            Span::raw(format!(" Total lines: {}", stats.total)),
            sep(),
            Span::styled(
                format!("Added: {}", stats.added),
                Style::default().fg(self.theme.marker_foreground(Classification::Added)),
            ),
            sep(),
            Span::styled(
                format!("Removed: {}", stats.removed),
                Style::default().fg(self.theme.marker_foreground(Classification::Removed)),
            ),
            sep(),
            Span::raw(format!("Changed: {}", stats.changed)),
            sep(),
            Span::styled(
                format!("Unchanged: {}", stats.unchanged),
                Style::default().fg(self.theme.marker_foreground(Classification::Unchanged)),
            ),
        ];
        if cmp.search.is_active() {
            spans.push(sep());
            spans.push(Span::raw(format!(
                "Search matches: {}",
                cmp.search.match_count
            )));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }

    fn render_search(&self, area: Rect, buf: &mut Buffer, cmp: &Comparison) {
        let border = if cmp.search_editing {
            self.theme.focused_border()
        } else {
            self.theme.unfocused_border()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(" Search in config ");
        let inner = block.inner(area);
        block.render(area, buf);

        let input = &cmp.search_input;
        if input.text.is_empty() && !cmp.search_editing {
            buf.set_string(
                inner.x,
                inner.y,
                "press / to search",
                Style::default().fg(self.theme.hint_text_foreground()),
            );
            return;
        }
        buf.set_stringn(
            inner.x,
            inner.y,
            &input.text,
            inner.width as usize,
            Style::default(),
        );

        if cmp.search_editing {
            let cursor_x = inner.x + input.cursor_column() as u16;
            if cursor_x < inner.x + inner.width {
                buf.set_style(
                    Rect::new(cursor_x, inner.y, 1, 1),
                    Style::default().bg(Color::White).fg(Color::Black),
                );
            }
        }
    }
}

/// Render a bare hint line, for callers that draw their own chrome.
pub fn hint_line<'h, T: ThemeProvider>(hints: &'h [FooterHint], theme: &T) -> Line<'h> {
    footer_line(hints, theme)
}
