//! Presentation-only state of the chat screen

use super::panels::{self, Fact};

pub struct ChatView {
    /// Scroll offset for messages; `u16::MAX` pins to the bottom
    pub scroll_offset: u16,
    /// Largest useful offset, recorded by the last render
    pub max_scroll: u16,
    /// Typing indicator animation frame
    pub loading_frame: usize,
    pub status_message: Option<String>,
    pub show_help: bool,
    pub fact: &'static Fact,
}

impl Default for ChatView {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatView {
    pub fn new() -> Self {
        Self {
            scroll_offset: u16::MAX,
            max_scroll: 0,
            loading_frame: 0,
            status_message: None,
            show_help: false,
            fact: panels::random_fact(),
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.min(self.max_scroll).saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        if self.scroll_offset == u16::MAX {
            return;
        }
        self.scroll_offset += 1;
        if self.scroll_offset >= self.max_scroll {
            self.scroll_to_bottom();
        }
    }

    pub fn scroll_to_bottom(&mut self) {
        // Resolved against content height at render time
        self.scroll_offset = u16::MAX;
    }

    pub fn tick_loading(&mut self) {
        self.loading_frame = (self.loading_frame + 1) % 4;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }
}
