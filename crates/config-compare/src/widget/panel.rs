//! One side of the comparison: line numbers, markers and highlighted text.

use std::ops::Range;

use crate::model::RenderedLine;
use crate::traits::ThemeProvider;
use ratatui::prelude::*;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Widget};

/// A single hint entry for the footer.
#[derive(Debug, Clone)]
pub struct FooterHint {
    /// The key (e.g., "/", "q").
    pub key: String,
    /// The description (e.g., "Search", "Close").
    pub description: String,
}

impl FooterHint {
    /// Create a new footer hint.
    pub fn new(key: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            description: description.into(),
        }
    }
}

/// Build the styled footer line shown on a block's bottom border.
pub(crate) fn footer_line<'h, T: ThemeProvider>(hints: &'h [FooterHint], theme: &T) -> Line<'h> {
    let mut spans = vec![Span::raw(" ")];
    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(
                " │ ",
                Style::default().fg(theme.hint_text_foreground()),
            ));
        }
        spans.push(Span::styled(
            hint.key.as_str(),
            Style::default()
                .fg(theme.hint_key_foreground())
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", hint.description),
            Style::default().fg(theme.hint_text_foreground()),
        ));
    }
    spans.push(Span::raw(" "));
    Line::from(spans)
}

/// Split `text` into runs, flagging the ones covered by a search match.
pub(crate) fn segments<'t>(text: &'t str, highlights: &[Range<usize>]) -> Vec<(&'t str, bool)> {
    let mut out = Vec::new();
    let mut pos = 0;
    for range in highlights {
        let (start, end) = (range.start.min(text.len()), range.end.min(text.len()));
        if start < pos || start >= end {
            continue;
        }
        if start > pos {
            out.push((&text[pos..start], false));
        }
        out.push((&text[start..end], true));
        pos = end;
    }
    if pos < text.len() {
        out.push((&text[pos..], false));
    }
    out
}

/// Widget rendering the visible lines of one panel from a scroll offset.
pub struct PanelWidget<'a, T: ThemeProvider> {
    lines: &'a [RenderedLine],
    title: &'a str,
    offset: usize,
    line_no_width: usize,
    theme: &'a T,
    focused: bool,
    footer_hints: &'a [FooterHint],
}

impl<'a, T: ThemeProvider> PanelWidget<'a, T> {
    pub fn new(
        lines: &'a [RenderedLine],
        title: &'a str,
        offset: usize,
        line_no_width: usize,
        theme: &'a T,
        focused: bool,
    ) -> Self {
        Self {
            lines,
            title,
            offset,
            line_no_width,
            theme,
            focused,
            footer_hints: &[],
        }
    }

    /// Set footer hints to display at the bottom border.
    pub fn with_footer_hints(mut self, hints: &'a [FooterHint]) -> Self {
        self.footer_hints = hints;
        self
    }

    fn render_line(&self, line: &RenderedLine, x: u16, y: u16, width: u16, buf: &mut Buffer) {
        let base_style = Style::default().bg(self.theme.line_background(line.classification));
        buf.set_style(Rect::new(x, y, width, 1), base_style);

        let right = x + width;
        let mut current_x = x;

        let line_no = format!("{:>width$} ", line.line_number, width = self.line_no_width);
        let (next_x, _) = buf.set_stringn(
            current_x,
            y,
            &line_no,
            (right - current_x) as usize,
            base_style.fg(self.theme.line_number_foreground()),
        );
        current_x = next_x;
        if current_x >= right {
            return;
        }

        let marker = format!("{} ", line.classification.marker());
        let (next_x, _) = buf.set_stringn(
            current_x,
            y,
            &marker,
            (right - current_x) as usize,
            base_style.fg(self.theme.marker_foreground(line.classification)),
        );
        current_x = next_x;

        let match_style = base_style
            .fg(self.theme.match_foreground())
            .bg(self.theme.match_background());
        for (text, matched) in segments(&line.text, &line.highlights) {
            if current_x >= right {
                break;
            }
            let style = if matched { match_style } else { base_style };
            let (next_x, _) =
                buf.set_stringn(current_x, y, text, (right - current_x) as usize, style);
            current_x = next_x;
        }
    }
}

impl<T: ThemeProvider> Widget for PanelWidget<'_, T> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(self.theme.focused_border())
        } else {
            Style::default().fg(self.theme.unfocused_border())
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ", self.title));
        if !self.footer_hints.is_empty() {
            block = block.title_bottom(footer_line(self.footer_hints, self.theme));
        }

        let inner = block.inner(area);
        block.render(area, buf);

        let visible = self
            .lines
            .iter()
            .filter(|l| l.is_visible())
            .skip(self.offset)
            .take(inner.height as usize);
        for (row, line) in visible.enumerate() {
            self.render_line(line, inner.x, inner.y + row as u16, inner.width, buf);
        }
    }
}
