//! Derived statistics over the message history

use crate::message::Message;
use serde::Serialize;

/// Counts shown in the chat stats panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    pub questions: usize,
    pub answers: usize,
    pub total: usize,
    /// Percentage of messages written by the bot, rounded to the nearest integer
    pub response_rate: u32,
}

impl SessionStats {
    pub fn from_history(history: &[Message]) -> Self {
        let questions = history.iter().filter(|m| m.is_user()).count();
        let answers = history.iter().filter(|m| m.is_bot()).count();
        let total = history.len();
        Self {
            questions,
            answers,
            total,
            response_rate: response_rate(answers, total),
        }
    }
}

/// `round(100 * answers / total)`, or 0 for an empty history
pub fn response_rate(answers: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((answers as f64 / total as f64) * 100.0).round() as u32
}
