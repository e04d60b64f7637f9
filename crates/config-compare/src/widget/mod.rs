//! Ratatui widgets for the comparison view.

mod compare_view;
mod panel;

pub use compare_view::{hint_line, CompareView};
pub use panel::{FooterHint, PanelWidget};
