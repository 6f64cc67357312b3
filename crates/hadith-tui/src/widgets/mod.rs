//! Ratatui widgets for the hadith TUI.

pub mod command_bar;
pub mod detail;
pub mod filter_bar;
pub mod header;
pub mod help;
pub mod pager;
pub mod query_bar;
pub mod results_list;
