//! Plain-text transcript rendering

use crate::message::Message;

/// Separator between transcript paragraphs
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Render history as `"<You|Assistant>: <text>"` paragraphs separated by a blank line.
///
/// No header, no trailing newline. An empty history renders as an empty string.
pub fn render(history: &[Message]) -> String {
    history
        .iter()
        .map(|msg| format!("{}: {}", msg.sender.label(), msg.text))
        .collect::<Vec<_>>()
        .join(PARAGRAPH_SEPARATOR)
}
