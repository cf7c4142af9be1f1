//! Full-screen chat
//!
//! - view.rs: scroll, status line and other presentation-only state
//! - input.rs: key handling and `/command` parsing
//! - panels.rs: sidebar content (facts, resources, label truncation)
//! - ui.rs: rendering
//! - runner.rs: event loop tying the session, controller and screen together

mod input;
mod panels;
mod runner;
mod ui;
mod view;

pub use input::{CommandResult, InputAction, handle_input, parse_command};
pub use panels::truncate_label;
pub use runner::{ChatOptions, run_chat};
