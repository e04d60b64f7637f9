//! Line counts over the currently visible state.

use crate::model::{Classification, RenderedPanels};

/// Counts of visible lines across both panels.
///
/// `changed` is always zero. A modified line is a removal on the left plus an
/// addition on the right, and the field only keeps the displayed shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompareStats {
    pub total: usize,
    pub added: usize,
    pub removed: usize,
    pub changed: usize,
    pub unchanged: usize,
}

/// Recount from scratch. Hidden lines are never counted.
pub fn aggregate(panels: &RenderedPanels) -> CompareStats {
    let mut stats = CompareStats::default();
    for line in panels.iter().filter(|l| l.is_visible()) {
        match line.classification {
            Classification::Added => stats.added += 1,
            Classification::Removed => stats.removed += 1,
            Classification::Unchanged => stats.unchanged += 1,
        }
    }
    stats.total = stats.added + stats.removed + stats.unchanged;
    stats
}
