//! Extension traits for plugging the comparison into an application.

mod snapshot_source;
mod theme_provider;

pub use snapshot_source::{SnapshotError, SnapshotSource};
pub use theme_provider::{DefaultTheme, ThemeProvider};
