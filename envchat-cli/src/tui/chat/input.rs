//! Chat input handling

use envchat_session::Session;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Number of quick questions reachable through function keys
pub const QUICK_KEYS: u8 = 6;

/// Input action result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// No action needed
    None,
    /// Submit the current input
    Submit,
    /// Send the quick question at this index
    QuickQuestion(usize),
    /// Re-send the recent question at this index (0 = most recent)
    RecentQuestion(usize),
    /// Exit the chat
    Exit,
    /// Execute a command
    Command(String),
    ScrollUp,
    ScrollDown,
    ScrollTop,
    ScrollBottom,
}

/// Handle a terminal event, editing the input buffer in place
pub fn handle_input(session: &mut Session, event: Event) -> InputAction {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            if session.is_busy() {
                handle_key_busy(key)
            } else {
                handle_key(session, key)
            }
        }
        _ => InputAction::None,
    }
}

/// While a reply is pending only exiting and scrolling are allowed
fn handle_key_busy(key: KeyEvent) -> InputAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('q') {
        return InputAction::Exit;
    }
    match key.code {
        KeyCode::Up | KeyCode::PageUp => InputAction::ScrollUp,
        KeyCode::Down | KeyCode::PageDown => InputAction::ScrollDown,
        _ => InputAction::None,
    }
}

fn handle_key(session: &mut Session, key: KeyEvent) -> InputAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    if ctrl && key.code == KeyCode::Char('q') {
        return InputAction::Exit;
    }
    if key.code == KeyCode::Char('q') && !alt && session.pending_input().is_empty() {
        return InputAction::Exit;
    }
    if ctrl && key.code == KeyCode::Char('c') {
        session.clear_input();
        return InputAction::None;
    }

    match key.code {
        KeyCode::Enter => {
            if is_command(session.pending_input()) {
                return InputAction::Command(session.take_input());
            }
            InputAction::Submit
        }
        KeyCode::F(n) if (1..=QUICK_KEYS).contains(&n) => InputAction::QuickQuestion(usize::from(n - 1)),
        KeyCode::Char(c @ '1'..='9') if alt => {
            InputAction::RecentQuestion(c as usize - '1' as usize)
        }
        KeyCode::Esc => {
            session.clear_input();
            InputAction::None
        }
        KeyCode::Backspace => {
            session.delete_char();
            InputAction::None
        }
        KeyCode::Delete => {
            session.delete_char_forward();
            InputAction::None
        }
        KeyCode::Left => {
            session.move_cursor_left();
            InputAction::None
        }
        KeyCode::Right => {
            session.move_cursor_right();
            InputAction::None
        }
        KeyCode::Home => {
            session.move_cursor_home();
            InputAction::None
        }
        KeyCode::End => {
            session.move_cursor_end();
            InputAction::None
        }
        KeyCode::Up | KeyCode::PageUp => InputAction::ScrollUp,
        KeyCode::Down | KeyCode::PageDown => InputAction::ScrollDown,
        KeyCode::Char('u') if ctrl => InputAction::ScrollTop,
        KeyCode::Char('d') if ctrl => InputAction::ScrollBottom,
        KeyCode::Char(c) if !ctrl && !alt => {
            session.insert_char(c);
            InputAction::None
        }
        _ => InputAction::None,
    }
}

/// Whether the input is a `/command`
pub fn is_command(input: &str) -> bool {
    input.starts_with('/')
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    None,
    ShowHelp,
    Export,
    Clear,
    Exit,
    Unknown(String),
}

/// Parse a `/command` line
pub fn parse_command(input: &str) -> CommandResult {
    let cmd = input.trim_start_matches('/');
    let name = cmd
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_ascii_lowercase();

    match name.as_str() {
        "" => CommandResult::None,
        "help" | "?" => CommandResult::ShowHelp,
        "export" | "save" => CommandResult::Export,
        "clear" | "reset" | "new" => CommandResult::Clear,
        "exit" | "quit" | "bye" => CommandResult::Exit,
        _ => CommandResult::Unknown(name),
    }
}

pub const HELP_TEXT: &str = r#"Commands:
  /help    - Show this help
  /export  - Save the conversation as a text file
  /clear   - Clear the conversation
  /exit    - Exit chat

Keys:
  Enter          - Send message
  F1..F6         - Ask a quick question
  Alt+1..Alt+5   - Ask a recent question again
  PageUp/PageDown - Scroll
  Ctrl+Q         - Exit"#;
