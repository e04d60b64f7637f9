//! Vertical scroll lockstep between the two panels.

use crate::model::Panel;

/// Keeps the left and right panels at the same vertical offset.
///
/// Scrolling one panel moves the other to the same offset. The move on the
/// peer marks it as syncing, and any scroll event the peer reports back
/// through [`on_scroll`](Self::on_scroll) is ignored until the next
/// [`tick`](Self::tick). Direct scrolls (keys, search) go through
/// [`scroll_to`](Self::scroll_to) and are never suppressed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollCoordinator {
    offsets: [usize; 2],
    content_len: [usize; 2],
    viewport_height: usize,
    syncing: [bool; 2],
}

impl ScrollCoordinator {
    pub fn new(left_len: usize, right_len: usize, viewport_height: usize) -> Self {
        Self {
            offsets: [0, 0],
            content_len: [left_len, right_len],
            viewport_height,
            syncing: [false, false],
        }
    }

    /// Current offset of a panel.
    pub fn offset(&self, panel: Panel) -> usize {
        self.offsets[panel.index()]
    }

    pub fn viewport_height(&self) -> usize {
        self.viewport_height
    }

    /// Whether a scroll event on this panel would currently be suppressed.
    pub fn is_syncing(&self, panel: Panel) -> bool {
        self.syncing[panel.index()]
    }

    /// Largest offset that still fills the viewport.
    pub fn max_offset(&self, panel: Panel) -> usize {
        self.content_len[panel.index()].saturating_sub(self.viewport_height)
    }

    /// Handle a scroll reported by `panel`, which may be the echo of a sync.
    ///
    /// Returns `false` when the event was caused by synchronization and was
    /// ignored.
    pub fn on_scroll(&mut self, panel: Panel, offset: usize) -> bool {
        let idx = panel.index();
        if self.syncing[idx] {
            log::trace!("Ignoring synced scroll on {:?}", panel);
            return false;
        }

        let offset = offset.min(self.max_offset(panel));
        self.offsets[idx] = offset;

        let peer = panel.other();
        self.offsets[peer.index()] = offset.min(self.max_offset(peer));
        self.syncing[peer.index()] = true;
        true
    }

    /// Scroll `panel` on request. Clears the panel's own guard first so a
    /// pending sync never swallows it.
    pub fn scroll_to(&mut self, panel: Panel, offset: usize) -> bool {
        self.syncing[panel.index()] = false;
        self.on_scroll(panel, offset)
    }

    /// Clear the sync guards. Called once per event loop iteration.
    pub fn tick(&mut self) {
        self.syncing = [false, false];
    }

    /// Scroll relative to the current offset.
    pub fn scroll_by(&mut self, panel: Panel, delta: isize) -> bool {
        let current = self.offset(panel);
        let target = if delta < 0 {
            current.saturating_sub(delta.unsigned_abs())
        } else {
            current.saturating_add(delta as usize)
        };
        self.scroll_to(panel, target)
    }

    pub fn page_down(&mut self, panel: Panel) -> bool {
        self.scroll_by(panel, self.page() as isize)
    }

    pub fn page_up(&mut self, panel: Panel) -> bool {
        self.scroll_by(panel, -(self.page() as isize))
    }

    pub fn to_top(&mut self, panel: Panel) -> bool {
        self.scroll_to(panel, 0)
    }

    pub fn to_bottom(&mut self, panel: Panel) -> bool {
        self.scroll_to(panel, usize::MAX)
    }

    /// Scroll so that `row` of `panel` sits in the middle of the viewport.
    pub fn center_on(&mut self, panel: Panel, row: usize) -> bool {
        self.scroll_to(panel, row.saturating_sub(self.viewport_height / 2))
    }

    /// Update the visible line counts, clamping offsets into the new range.
    pub fn set_content(&mut self, left_len: usize, right_len: usize) {
        self.content_len = [left_len, right_len];
        self.clamp_offsets();
    }

    pub fn set_viewport_height(&mut self, height: usize) {
        self.viewport_height = height;
        self.clamp_offsets();
    }

    /// Back to the top without touching the content or viewport sizes.
    pub fn reset(&mut self) {
        self.offsets = [0, 0];
        self.syncing = [false, false];
    }

    fn page(&self) -> usize {
        self.viewport_height.saturating_sub(1).max(1)
    }

    fn clamp_offsets(&mut self) {
        for panel in [Panel::Left, Panel::Right] {
            let max = self.max_offset(panel);
            let offset = &mut self.offsets[panel.index()];
            *offset = (*offset).min(max);
        }
    }
}
