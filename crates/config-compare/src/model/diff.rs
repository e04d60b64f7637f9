//! Edit scripts and the rendered, line-numbered panels built from them.

use std::ops::Range;

/// One run of an edit script.
///
/// Concatenating the lines of all `Equal` and `Delete` runs gives the source
/// lines; `Equal` and `Insert` runs give the target lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffOp {
    /// Lines present in both snapshots.
    Equal(Vec<String>),
    /// Lines only in the target snapshot.
    Insert(Vec<String>),
    /// Lines only in the source snapshot.
    Delete(Vec<String>),
}

impl DiffOp {
    /// Lines belonging to this run.
    pub fn lines(&self) -> &[String] {
        match self {
            DiffOp::Equal(lines) | DiffOp::Insert(lines) | DiffOp::Delete(lines) => lines,
        }
    }

    /// Number of lines in this run.
    pub fn len(&self) -> usize {
        self.lines().len()
    }

    /// Whether the run carries no lines.
    pub fn is_empty(&self) -> bool {
        self.lines().is_empty()
    }
}

/// Classification of a rendered line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// Only in the compare (right) snapshot.
    Added,
    /// Only in the source (left) snapshot.
    Removed,
    /// In both snapshots.
    Unchanged,
}

impl Classification {
    /// All classifications in display order.
    pub const ALL: [Classification; 3] = [
        Classification::Added,
        Classification::Removed,
        Classification::Unchanged,
    ];

    /// Gutter marker for this classification.
    pub fn marker(&self) -> char {
        match self {
            Classification::Added => '+',
            Classification::Removed => '-',
            Classification::Unchanged => '=',
        }
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Classification::Added => "added",
            Classification::Removed => "removed",
            Classification::Unchanged => "unchanged",
        }
    }
}

/// One of the two side-by-side panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    /// Source (original) snapshot.
    Left,
    /// Compare (newer) snapshot.
    Right,
}

impl Panel {
    /// The opposite panel.
    pub fn other(self) -> Panel {
        match self {
            Panel::Left => Panel::Right,
            Panel::Right => Panel::Left,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Panel::Left => 0,
            Panel::Right => 1,
        }
    }
}

/// A line as displayed in one panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    /// Panel the line belongs to.
    pub panel: Panel,
    /// 1-based, panel-local line number.
    pub line_number: u32,
    /// Added, removed or unchanged.
    pub classification: Classification,
    /// Line text without the newline.
    pub text: String,
    /// Set by the visibility filter.
    pub hidden: bool,
    /// Byte ranges of search matches within `text`.
    pub highlights: Vec<Range<usize>>,
}

impl RenderedLine {
    /// Create a visible, unhighlighted line.
    pub fn new(
        panel: Panel,
        line_number: u32,
        classification: Classification,
        text: impl Into<String>,
    ) -> Self {
        Self {
            panel,
            line_number,
            classification,
            text: text.into(),
            hidden: false,
            highlights: Vec::new(),
        }
    }

    /// Whether the line passes the current filter.
    pub fn is_visible(&self) -> bool {
        !self.hidden
    }

    /// Whether the current search marked this line.
    pub fn is_highlighted(&self) -> bool {
        !self.highlights.is_empty()
    }
}

/// Both panels of a comparison. This collection is the source of truth;
/// widgets only project it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedPanels {
    /// Source snapshot lines.
    pub left: Vec<RenderedLine>,
    /// Compare snapshot lines.
    pub right: Vec<RenderedLine>,
}

impl RenderedPanels {
    /// Lines of one panel.
    pub fn panel(&self, panel: Panel) -> &[RenderedLine] {
        match panel {
            Panel::Left => &self.left,
            Panel::Right => &self.right,
        }
    }

    /// Mutable lines of one panel.
    pub fn panel_mut(&mut self, panel: Panel) -> &mut [RenderedLine] {
        match panel {
            Panel::Left => &mut self.left,
            Panel::Right => &mut self.right,
        }
    }

    /// All lines, left panel first.
    pub fn iter(&self) -> impl Iterator<Item = &RenderedLine> {
        self.left.iter().chain(self.right.iter())
    }

    /// All lines mutably, left panel first.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut RenderedLine> {
        self.left.iter_mut().chain(self.right.iter_mut())
    }

    /// Visible lines of one panel, in order.
    pub fn visible(&self, panel: Panel) -> impl Iterator<Item = &RenderedLine> {
        self.panel(panel).iter().filter(|l| l.is_visible())
    }

    /// Number of visible lines in one panel.
    pub fn visible_len(&self, panel: Panel) -> usize {
        self.visible(panel).count()
    }

    /// Text of every line in a panel, ignoring visibility.
    pub fn texts(&self, panel: Panel) -> Vec<&str> {
        self.panel(panel).iter().map(|l| l.text.as_str()).collect()
    }

    /// Width of the line number gutter.
    pub fn line_no_width(&self) -> usize {
        let max = self.iter().map(|l| l.line_number).max().unwrap_or(1);
        max.to_string().len().max(3)
    }

    /// Whether both panels are empty.
    pub fn is_empty(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }
}
