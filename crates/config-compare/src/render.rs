//! Turns an edit script into the two side-by-side panels.

use crate::model::{Classification, DiffOp, Panel, RenderedLine, RenderedPanels};

/// Render an edit script into left (source) and right (target) panels.
///
/// Equal runs go to both panels as unchanged, deletions only to the left and
/// insertions only to the right. Each panel numbers its lines from 1 without
/// gaps.
pub fn render(script: &[DiffOp]) -> RenderedPanels {
    let mut panels = RenderedPanels::default();
    let mut left_no = 0u32;
    let mut right_no = 0u32;

    for op in script {
        match op {
            DiffOp::Equal(lines) => {
                for line in lines {
                    left_no += 1;
                    right_no += 1;
                    panels.left.push(RenderedLine::new(
                        Panel::Left,
                        left_no,
                        Classification::Unchanged,
                        line.as_str(),
                    ));
                    panels.right.push(RenderedLine::new(
                        Panel::Right,
                        right_no,
                        Classification::Unchanged,
                        line.as_str(),
                    ));
                }
            }
            DiffOp::Delete(lines) => {
                for line in lines {
                    left_no += 1;
                    panels.left.push(RenderedLine::new(
                        Panel::Left,
                        left_no,
                        Classification::Removed,
                        line.as_str(),
                    ));
                }
            }
            DiffOp::Insert(lines) => {
                for line in lines {
                    right_no += 1;
                    panels.right.push(RenderedLine::new(
                        Panel::Right,
                        right_no,
                        Classification::Added,
                        line.as_str(),
                    ));
                }
            }
        }
    }

    panels
}
