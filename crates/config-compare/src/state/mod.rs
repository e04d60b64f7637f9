//! State management for the compare session.

mod comparison;
mod scroll;
mod search_input;
mod session;

pub use comparison::Comparison;
pub use scroll::ScrollCoordinator;
pub use search_input::SearchInput;
pub use session::{
    CompareSessionController, Completion, FetchRequest, FetchTicket, Selection, SessionError,
    SessionPhase,
};
