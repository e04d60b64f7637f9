//! Show/hide policy per line classification.

use crate::model::{Classification, RenderedPanels};

/// Which classifications are currently shown. Everything is visible by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterState {
    pub show_added: bool,
    pub show_removed: bool,
    pub show_unchanged: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            show_added: true,
            show_removed: true,
            show_unchanged: true,
        }
    }
}

impl FilterState {
    /// Whether lines of this classification are shown.
    pub fn is_visible(&self, classification: Classification) -> bool {
        match classification {
            Classification::Added => self.show_added,
            Classification::Removed => self.show_removed,
            Classification::Unchanged => self.show_unchanged,
        }
    }

    pub fn set(&mut self, classification: Classification, visible: bool) {
        match classification {
            Classification::Added => self.show_added = visible,
            Classification::Removed => self.show_removed = visible,
            Classification::Unchanged => self.show_unchanged = visible,
        }
    }

    /// Flip one classification and return its new visibility.
    pub fn toggle(&mut self, classification: Classification) -> bool {
        let visible = !self.is_visible(classification);
        self.set(classification, visible);
        visible
    }
}

/// Re-tag every rendered line as hidden or visible.
///
/// Never touches text, numbering or order. Search markers on lines that become
/// hidden are dropped, since hidden lines cannot be matches.
pub fn apply(panels: &mut RenderedPanels, filter: &FilterState) {
    for line in panels.iter_mut() {
        line.hidden = !filter.is_visible(line.classification);
        if line.hidden {
            line.highlights.clear();
        }
    }
}
