//! Interactive selection state
//!
//! [`SelectorSession`] is the keystroke-driven state machine; [`viewport`]
//! keeps the highlighted row inside the visible window. Neither touches the
//! terminal, so the whole selector can be driven from tests.

mod session;
pub mod viewport;

pub use session::{
    EventResult, MessageLevel, Mode, Outcome, SelectorInput, SelectorSession, StatusMessage,
};
