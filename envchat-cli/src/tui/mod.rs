//! Terminal user interface using Ratatui

pub mod chat;
mod terminal;
mod theme;

pub use terminal::{Tui, init_terminal, restore_terminal};
