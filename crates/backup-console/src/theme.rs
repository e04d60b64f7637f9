use config_compare::ThemeProvider;
use ratatui::{prelude::*, style::palette::tailwind};

/// Application theme - centralized color and style management
#[derive(Debug, Clone)]
pub struct Theme {
    // Background colors
    pub bg_primary: Color,
    pub bg_panel: Color,

    // Text colors
    pub text_primary: Color,
    pub text_muted: Color,

    // Accent colors
    pub accent_primary: Color,

    // Status colors
    pub status_success: Color,
    pub status_error: Color,
    pub status_warning: Color,
    pub status_info: Color,

    // Selection colors
    pub selected_bg: Color,
    pub selected_fg: Color,

    // Table colors
    pub table_header_fg: Color,

    // Comparison colors
    pub diff_added_bg: Color,
    pub diff_removed_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg_primary: tailwind::SLATE.c950,
            bg_panel: tailwind::SLATE.c900,

            text_primary: tailwind::SLATE.c100,
            text_muted: tailwind::SLATE.c400,

            accent_primary: tailwind::CYAN.c400,

            status_success: tailwind::GREEN.c400,
            status_error: tailwind::RED.c400,
            status_warning: tailwind::AMBER.c400,
            status_info: tailwind::BLUE.c400,

            selected_bg: tailwind::SLATE.c700,
            selected_fg: tailwind::SLATE.c50,

            table_header_fg: tailwind::CYAN.c300,

            diff_added_bg: Color::Rgb(20, 40, 20),
            diff_removed_bg: Color::Rgb(40, 20, 20),
        }
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent_primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.selected_fg)
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }
}

/// Bridges the console theme to the comparison widgets
pub struct CompareThemeAdapter<'a>(pub &'a Theme);

impl ThemeProvider for CompareThemeAdapter<'_> {
    fn added_background(&self) -> Color {
        self.0.diff_added_bg
    }

    fn removed_background(&self) -> Color {
        self.0.diff_removed_bg
    }

    fn unchanged_background(&self) -> Color {
        self.0.bg_panel
    }

    fn line_number_foreground(&self) -> Color {
        self.0.text_muted
    }

    fn focused_border(&self) -> Color {
        self.0.accent_primary
    }

    fn unfocused_border(&self) -> Color {
        self.0.text_muted
    }

    fn hint_key_foreground(&self) -> Color {
        self.0.accent_primary
    }

    fn hint_text_foreground(&self) -> Color {
        self.0.text_muted
    }
}
