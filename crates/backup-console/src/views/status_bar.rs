//! Status Bar Widget
//!
//! Renders the status bar at the bottom of the screen.
//! Format: `[timestamp] icon message          +N running [source]`

use crate::view_models::StatusBarViewModel;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use ratatui::text::Line;

/// Widget for rendering the status bar
pub struct StatusBarWidget<'a>(pub &'a StatusBarViewModel);

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let vm = self.0;

        if area.height < 1 || area.width < 4 {
            return;
        }

        for x in area.x..area.x + area.width {
            buf[(x, area.y)].set_bg(vm.bg_color).set_char(' ');
        }

        let source = match (vm.running_note.is_empty(), vm.source.is_empty()) {
            (true, true) => String::new(),
            (true, false) => format!("[{}]", vm.source),
            (false, true) => vm.running_note.clone(),
            (false, false) => format!("{} [{}]", vm.running_note, vm.source),
        };
        let source_width = Line::raw(source.as_str()).width() as u16;

        let mut x = area.x + 1;
        let right = area.x + area.width - 1;

        if !vm.timestamp.is_empty() {
            let ts = format!("[{}] ", vm.timestamp);
            let (next_x, _) = buf.set_stringn(
                x,
                area.y,
                &ts,
                right.saturating_sub(x) as usize,
                vm.metadata_style,
            );
            x = next_x;
        }

        let (next_x, _) = buf.set_stringn(
            x,
            area.y,
            format!("{} ", vm.icon),
            right.saturating_sub(x) as usize,
            vm.message_style,
        );
        x = next_x;

        // Leave room for the source on the right
        let message_end = right.saturating_sub(source_width + 1);
        if message_end > x {
            buf.set_stringn(
                x,
                area.y,
                &vm.message,
                (message_end - x) as usize,
                vm.message_style,
            );
        }

        if !source.is_empty() && right > source_width {
            buf.set_string(right - source_width, area.y, &source, vm.metadata_style);
        }
    }
}
