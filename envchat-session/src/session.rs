//! Session state store
//!
//! Holds the message history, the unsent input buffer and the busy flag.
//! Every mutation is announced to subscribers so a presentation layer can
//! refresh without the store knowing how it is drawn.

use crate::message::Message;
use crate::stats::SessionStats;
use crate::transcript;
use tokio::sync::broadcast;

/// Buffered events per subscriber before it starts lagging
const EVENT_CAPACITY: usize = 64;

/// Change notifications published by [`Session`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    MessageAppended(Message),
    HistoryCleared,
    BusyChanged(bool),
    InputChanged,
}

/// Chat session state
pub struct Session {
    history: Vec<Message>,
    input: String,
    /// Cursor position in input, counted in chars
    cursor_pos: usize,
    busy: bool,
    events: broadcast::Sender<SessionEvent>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("history", &self.history.len())
            .field("input", &self.input)
            .field("busy", &self.busy)
            .finish()
    }
}

impl Session {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            history: Vec::new(),
            input: String::new(),
            cursor_pos: 0,
            busy: false,
            events,
        }
    }

    /// Register an observer. Receivers that fall behind see `Lagged` and keep going.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    fn notify(&self, event: SessionEvent) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }

    pub fn history(&self) -> &[Message] {
        &self.history
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn pending_input(&self) -> &str {
        &self.input
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor_pos
    }

    /// Add a message to the end of history
    pub fn append_message(&mut self, message: Message) {
        self.history.push(message.clone());
        self.notify(SessionEvent::MessageAppended(message));
    }

    pub fn set_busy(&mut self, busy: bool) {
        if self.busy != busy {
            self.busy = busy;
            self.notify(SessionEvent::BusyChanged(busy));
        }
    }

    /// Empty the history. Refused while an exchange is in flight, so a late
    /// reply can never land on a cleared conversation.
    ///
    /// Returns whether the history was cleared.
    pub fn clear(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.history.clear();
        self.notify(SessionEvent::HistoryCleared);
        true
    }

    pub fn stats(&self) -> SessionStats {
        SessionStats::from_history(&self.history)
    }

    /// The last `limit` user messages, most recent first
    pub fn recent_questions(&self, limit: usize) -> Vec<&Message> {
        self.history
            .iter()
            .rev()
            .filter(|m| m.is_user())
            .take(limit)
            .collect()
    }

    /// Transcript of the whole history
    pub fn export_text(&self) -> String {
        transcript::render(&self.history)
    }

    /// Replace the input buffer and move the cursor to its end
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.cursor_pos = self.input.chars().count();
        self.notify(SessionEvent::InputChanged);
    }

    /// Get the current input and clear it
    pub fn take_input(&mut self) -> String {
        self.cursor_pos = 0;
        let input = std::mem::take(&mut self.input);
        self.notify(SessionEvent::InputChanged);
        input
    }

    pub fn clear_input(&mut self) {
        if !self.input.is_empty() {
            self.take_input();
        }
    }

    /// Insert character at cursor position
    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_offset(self.cursor_pos);
        self.input.insert(at, c);
        self.cursor_pos += 1;
        self.notify(SessionEvent::InputChanged);
    }

    /// Delete character before cursor (backspace)
    pub fn delete_char(&mut self) {
        if self.cursor_pos > 0 {
            let at = self.byte_offset(self.cursor_pos - 1);
            self.input.remove(at);
            self.cursor_pos -= 1;
            self.notify(SessionEvent::InputChanged);
        }
    }

    /// Delete character at cursor (delete key)
    pub fn delete_char_forward(&mut self) {
        if self.cursor_pos < self.input_len() {
            let at = self.byte_offset(self.cursor_pos);
            self.input.remove(at);
            self.notify(SessionEvent::InputChanged);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_pos < self.input_len() {
            self.cursor_pos += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_pos = self.input_len();
    }

    fn input_len(&self) -> usize {
        self.input.chars().count()
    }

    fn byte_offset(&self, char_pos: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }
}
