//! Chat screen palette
//!
//! Greens for the assistant and environment panels, cyan for the user.

use ratatui::style::{Color, Modifier, Style};

/// Primary accent - cyan, used for the user side
pub const ACCENT: Color = Color::Rgb(100, 180, 220);
/// Environment green - assistant and key hints
pub const LEAF: Color = Color::Rgb(120, 200, 140);
/// Warm amber for numbers and the typing indicator
pub const HIGHLIGHT: Color = Color::Rgb(255, 200, 100);
/// Error and destructive actions - soft red
pub const ERROR: Color = Color::Rgb(220, 100, 100);
/// Muted text - placeholders and secondary information
pub const MUTED: Color = Color::Rgb(113, 128, 150);
/// Border color - subtle gray
pub const BORDER: Color = Color::Rgb(70, 75, 85);

/// Header title style
pub fn title() -> Style {
    Style::default().fg(LEAF).add_modifier(Modifier::BOLD)
}

/// Panel title style
pub fn section_title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Normal text style
pub fn text() -> Style {
    Style::default().fg(Color::White)
}

/// Secondary text style
pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

/// Border style
pub fn border() -> Style {
    Style::default().fg(BORDER)
}

/// Active border style
pub fn border_active() -> Style {
    Style::default().fg(ACCENT)
}

/// Typing indicator style
pub fn loading() -> Style {
    Style::default().fg(HIGHLIGHT)
}

/// User message prefix style
pub fn user_prefix() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Bot message prefix style
pub fn bot_prefix() -> Style {
    Style::default().fg(LEAF)
}

/// Stats panel value style
pub fn stat_value() -> Style {
    Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD)
}

/// Key binding hint style
pub fn key_hint() -> Style {
    Style::default().fg(LEAF)
}

/// Exit/destructive key hint style
pub fn key_destructive() -> Style {
    Style::default().fg(ERROR)
}
