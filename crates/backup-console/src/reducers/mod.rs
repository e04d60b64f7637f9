//! Reducers
//!
//! Pure functions producing the next state from the current state and an
//! action. `app_reducer::reduce` is the root and delegates per screen.

pub mod activity_log_reducer;
pub mod app_reducer;
pub mod backup_list_reducer;
pub mod compare_reducer;
pub mod device_list_reducer;
