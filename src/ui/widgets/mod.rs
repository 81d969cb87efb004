//! Ratatui widgets for the selector TUI

mod confirm_dialog;
mod help_bar;
mod item_list;
mod search_bar;
mod status_bar;

pub use confirm_dialog::ConfirmDialog;
pub use help_bar::{HelpBar, KeyHint};
pub use item_list::ItemList;
pub use search_bar::SearchBar;
pub use status_bar::StatusBar;
