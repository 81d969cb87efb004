//! Terminal front end for the selector
//!
//! The selector core never touches the terminal. This module supplies the
//! two boundaries it needs: an input source translating crossterm events into
//! [`SelectorInput`](crate::selector::SelectorInput) values, and a render sink
//! drawing the session with ratatui.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────┐
//! │  commands::browse            │
//! └──────────────┬───────────────┘
//!                │ InteractiveSelector
//!        ┌───────┴────────┐
//!        ▼                ▼
//! ┌──────────────┐ ┌──────────────────┐
//! │ Terminal     │ │ ScriptedSelector │
//! │ Selector     │ │ (tests)          │
//! └──────┬───────┘ └──────────────────┘
//!        │ draws / polls
//!        ▼
//! ┌──────────────┐ ┌──────────────┐
//! │   Ratatui    │ │  Crossterm   │
//! │  (widgets)   │ │   (events)   │
//! └──────────────┘ └──────────────┘
//! ```

pub mod error;
pub mod events;
mod finder;
pub mod mock;
mod theme;
pub mod traits;
pub mod widgets;

pub use error::{Result, UiError};
pub use finder::TerminalSelector;
pub use mock::ScriptedSelector;
pub use theme::Theme;
pub use traits::InteractiveSelector;
