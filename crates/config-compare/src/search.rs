//! Case-insensitive literal search over the visible lines of both panels.

use crate::model::{Panel, RenderedPanels};
use regex::{Regex, RegexBuilder};

/// The submitted search term and how many lines it matched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub term: String,
    pub match_count: usize,
}

impl SearchState {
    /// Whether a non-empty term is in effect.
    pub fn is_active(&self) -> bool {
        !self.term.is_empty()
    }
}

/// Location of a matching line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchMatch {
    pub panel: Panel,
    /// Index into the panel's full line list.
    pub index: usize,
    /// Row among the panel's visible lines, which is what scroll offsets use.
    pub row: usize,
}

/// Result of one search pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Number of lines with at least one occurrence, summed over both panels.
    pub match_count: usize,
    /// Topmost match, left panel first when both panels match on the same row.
    pub first_match: Option<SearchMatch>,
}

/// Mark every occurrence of `term` on visible lines.
///
/// All previous markers are cleared first. An empty term only clears.
/// Regex metacharacters in `term` match literally.
pub fn highlight(panels: &mut RenderedPanels, term: &str) -> SearchOutcome {
    for line in panels.iter_mut() {
        line.highlights.clear();
    }

    if term.is_empty() {
        return SearchOutcome::default();
    }

    let Some(matcher) = build_matcher(term) else {
        return SearchOutcome::default();
    };

    let mut outcome = SearchOutcome::default();
    for panel in [Panel::Left, Panel::Right] {
        let mut row = 0;
        for (index, line) in panels.panel_mut(panel).iter_mut().enumerate() {
            if line.hidden {
                continue;
            }
            line.highlights = matcher.find_iter(&line.text).map(|m| m.range()).collect();
            if line.is_highlighted() {
                outcome.match_count += 1;
                let candidate = SearchMatch { panel, index, row };
                outcome.first_match = match outcome.first_match {
                    Some(best) if best.row <= row => Some(best),
                    _ => Some(candidate),
                };
            }
            row += 1;
        }
    }

    log::debug!(
        "search {:?}: {} matching lines, first at {:?}",
        term,
        outcome.match_count,
        outcome.first_match
    );
    outcome
}

fn build_matcher(term: &str) -> Option<Regex> {
    match RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .build()
    {
        Ok(regex) => Some(regex),
        Err(e) => {
            log::warn!("Failed to build search pattern for {:?}: {}", term, e);
            None
        }
    }
}
