//! Trait for providing theme configuration to the comparison view.

use ratatui::style::Color;

use crate::model::Classification;

/// Provides colors for the comparison view.
///
/// Implement this trait to match the console's theme. Only the added and
/// removed backgrounds are required.
pub trait ThemeProvider: Send + Sync {
    /// Background color for added lines.
    fn added_background(&self) -> Color;

    /// Background color for removed lines.
    fn removed_background(&self) -> Color;

    /// Background color for unchanged lines.
    fn unchanged_background(&self) -> Color {
        Color::Reset
    }

    /// Background for a line by classification.
    fn line_background(&self, classification: Classification) -> Color {
        match classification {
            Classification::Added => self.added_background(),
            Classification::Removed => self.removed_background(),
            Classification::Unchanged => self.unchanged_background(),
        }
    }

    /// Gutter marker color by classification.
    fn marker_foreground(&self, classification: Classification) -> Color {
        match classification {
            Classification::Added => Color::Green,
            Classification::Removed => Color::Red,
            Classification::Unchanged => Color::DarkGray,
        }
    }

    /// Foreground color for line numbers.
    fn line_number_foreground(&self) -> Color {
        Color::DarkGray
    }

    /// Background of a search match within a line.
    fn match_background(&self) -> Color {
        Color::Yellow
    }

    /// Foreground of a search match within a line.
    fn match_foreground(&self) -> Color {
        Color::Black
    }

    /// Border color of the focused panel.
    fn focused_border(&self) -> Color {
        Color::Cyan
    }

    /// Border color of the other panel.
    fn unfocused_border(&self) -> Color {
        Color::DarkGray
    }

    /// Foreground color for key hints (the key part like "/", "q").
    fn hint_key_foreground(&self) -> Color {
        Color::Yellow
    }

    /// Foreground color for hint descriptions.
    fn hint_text_foreground(&self) -> Color {
        Color::DarkGray
    }
}

/// Default theme with dark-mode colors.
#[derive(Debug, Clone, Default)]
pub struct DefaultTheme;

impl ThemeProvider for DefaultTheme {
    fn added_background(&self) -> Color {
        Color::Rgb(30, 60, 30) // dark green
    }

    fn removed_background(&self) -> Color {
        Color::Rgb(60, 30, 30) // dark red
    }
}
