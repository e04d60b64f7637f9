//! Derived state of one open comparison.

use crate::differ::diff_lines;
use crate::filter::{self, FilterState};
use crate::model::{Classification, ConfigSnapshot, Panel, RenderedPanels};
use crate::render::render;
use crate::search::{self, SearchOutcome, SearchState};
use crate::stats::{aggregate, CompareStats};

use super::scroll::ScrollCoordinator;
use super::search_input::SearchInput;
use super::session::Selection;

/// Everything derived from two snapshots while the comparison view is open.
///
/// Dropped as a whole when the comparison closes, so filters and search never
/// leak into the next session.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub selection: Selection,
    pub source: ConfigSnapshot,
    pub target: ConfigSnapshot,
    pub panels: RenderedPanels,
    pub filter: FilterState,
    pub search: SearchState,
    pub stats: CompareStats,
    pub scroll: ScrollCoordinator,
    /// Draft of the next search term.
    pub search_input: SearchInput,
    /// Whether keystrokes go to the search input.
    pub search_editing: bool,
    /// Panel that receives scroll keys.
    pub focused: Panel,
}

impl Comparison {
    /// Diff, render, filter and count the two snapshots.
    pub fn build(
        selection: Selection,
        source: ConfigSnapshot,
        target: ConfigSnapshot,
        viewport_height: usize,
    ) -> Self {
        let script = diff_lines(source.text(), target.text());
        let mut panels = render(&script);
        let filter = FilterState::default();
        filter::apply(&mut panels, &filter);
        let stats = aggregate(&panels);
        let scroll = ScrollCoordinator::new(
            panels.visible_len(Panel::Left),
            panels.visible_len(Panel::Right),
            viewport_height,
        );

        log::info!(
            "Compared {} ({} lines) with {} ({} lines): +{} -{} ={}",
            source.filename,
            panels.left.len(),
            target.filename,
            panels.right.len(),
            stats.added,
            stats.removed,
            stats.unchanged
        );

        Self {
            selection,
            source,
            target,
            panels,
            filter,
            search: SearchState::default(),
            stats,
            scroll,
            search_input: SearchInput::default(),
            search_editing: false,
            focused: Panel::Left,
        }
    }

    /// Flip one classification, then recount and re-run the active search.
    ///
    /// Returns the new visibility of `classification`.
    pub fn toggle_filter(&mut self, classification: Classification) -> bool {
        let visible = self.filter.toggle(classification);
        filter::apply(&mut self.panels, &self.filter);
        self.stats = aggregate(&self.panels);
        if self.search.is_active() {
            let outcome = search::highlight(&mut self.panels, &self.search.term);
            self.search.match_count = outcome.match_count;
        }
        self.scroll.set_content(
            self.panels.visible_len(Panel::Left),
            self.panels.visible_len(Panel::Right),
        );
        visible
    }

    /// Search for the drafted term and bring the first match into view.
    pub fn submit_search(&mut self) -> SearchOutcome {
        self.search_editing = false;
        let term = self.search_input.text.clone();
        self.search_for(&term)
    }

    /// Search for `term`. An empty term clears the highlights.
    pub fn search_for(&mut self, term: &str) -> SearchOutcome {
        let outcome = search::highlight(&mut self.panels, term);
        self.search = SearchState {
            term: term.to_string(),
            match_count: outcome.match_count,
        };
        if let Some(first) = outcome.first_match {
            self.scroll.center_on(first.panel, first.row);
        }
        outcome
    }

    /// Height of the panels' viewport changed.
    pub fn set_viewport_height(&mut self, height: usize) {
        self.scroll.set_viewport_height(height);
    }
}
