//! Event types
//!
//! Events represent facts that have occurred and are broadcast to the
//! middleware chain. Unlike commands, events let middleware react to what
//! happened elsewhere. They are never forwarded to reducers.
//!
//! Events use past tense or descriptive names indicating something has
//! happened: `LoggedIn`, not `Login`.

use config_compare::CompareEvent;

/// Events that re-enter the middleware chain
#[derive(Debug, Clone)]
pub enum Event {
    /// The terminal is up and the first frame was drawn
    Started,

    /// A backend session has been established
    LoggedIn,

    /// Emitted by the comparison session while reducing a compare action
    Compare(CompareEvent),
}
