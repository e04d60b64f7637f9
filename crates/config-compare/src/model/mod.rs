//! Data models for configuration comparison.

mod diff;
mod snapshot;

pub use diff::{Classification, DiffOp, Panel, RenderedLine, RenderedPanels};
pub use snapshot::{filename_from_path, ConfigSnapshot, SnapshotContent, NOT_FOUND_PLACEHOLDER};
