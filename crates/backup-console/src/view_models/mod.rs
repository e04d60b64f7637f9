//! View models pre-compute presentation data from state

mod status_bar;

pub use status_bar::StatusBarViewModel;
