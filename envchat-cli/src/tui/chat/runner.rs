//! Chat runner - main event loop coordinator

use super::input::{CommandResult, InputAction, handle_input, parse_command};
use super::view::ChatView;
use super::ui::ChatUI;
use crate::tui::terminal::{Tui, init_terminal, restore_terminal};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use envchat_core::{
    ExchangeController, PendingExchange, ReplyService, SendRejected, SubmitOrigin,
    TranscriptExporter,
};
use envchat_session::SessionEvent;
use std::error::Error;
use std::time::Duration;
use tokio::sync::broadcast::{self, error::TryRecvError};
use tracing::{debug, info, warn};

/// Everything the chat screen needs besides the controller
#[derive(Debug, Clone)]
pub struct ChatOptions {
    /// Shown in the header
    pub endpoint: String,
    pub quick_questions: Vec<String>,
    pub recent_limit: usize,
    pub exporter: TranscriptExporter,
}

/// Run the TUI chat interface until the user exits
pub async fn run_chat<S>(
    controller: ExchangeController<S>,
    options: ChatOptions,
) -> Result<(), Box<dyn Error>>
where
    S: ReplyService + 'static,
{
    let mut terminal = init_terminal()?;
    let mut view = ChatView::new();

    let result = run_chat_loop(&mut terminal, &mut view, &controller, &options).await;

    restore_terminal()?;
    result
}

/// Internal chat loop
async fn run_chat_loop<S>(
    terminal: &mut Tui,
    view: &mut ChatView,
    controller: &ExchangeController<S>,
    options: &ChatOptions,
) -> Result<(), Box<dyn Error>>
where
    S: ReplyService + 'static,
{
    let mut events = controller.session().subscribe();

    loop {
        {
            let session = controller.session();
            terminal.draw(|frame| {
                ChatUI::render(frame, &session, &mut *view, options);
            })?;
        }
        drain_events(&mut events, view);

        let busy = controller.session().is_busy();
        let timeout = if busy {
            Duration::from_millis(100)
        } else {
            Duration::from_millis(50)
        };

        if !event::poll(timeout)? {
            if busy {
                view.tick_loading();
            }
            // Let spawned exchanges make progress between polls
            tokio::task::yield_now().await;
            continue;
        }

        let event = event::read()?;
        if view.show_help && is_escape(&event) {
            view.show_help = false;
            continue;
        }
        let action = handle_input(&mut controller.session(), event);

        match action {
            InputAction::Exit => return Ok(()),
            InputAction::Submit => {
                view.show_help = false;
                start(controller.begin_input(), view);
            }
            InputAction::QuickQuestion(index) => {
                if let Some(question) = options.quick_questions.get(index) {
                    start(controller.begin(question, SubmitOrigin::Preset), view);
                }
            }
            InputAction::RecentQuestion(index) => {
                let question = controller
                    .session()
                    .recent_questions(options.recent_limit)
                    .get(index)
                    .map(|message| message.text.clone());
                if let Some(question) = question {
                    start(controller.begin(&question, SubmitOrigin::History), view);
                }
            }
            InputAction::Command(cmd) => {
                if handle_command(controller, options, view, &cmd) {
                    return Ok(());
                }
            }
            InputAction::ScrollUp => view.scroll_up(),
            InputAction::ScrollDown => view.scroll_down(),
            InputAction::ScrollTop => view.scroll_offset = 0,
            InputAction::ScrollBottom => view.scroll_to_bottom(),
            InputAction::None => {}
        }
    }
}

/// Apply session notifications to the view
fn drain_events(events: &mut broadcast::Receiver<SessionEvent>, view: &mut ChatView) {
    loop {
        match events.try_recv() {
            Ok(SessionEvent::MessageAppended(_)) | Ok(SessionEvent::HistoryCleared) => {
                view.scroll_to_bottom();
            }
            Ok(SessionEvent::BusyChanged(false)) => view.loading_frame = 0,
            Ok(_) => {}
            Err(TryRecvError::Lagged(skipped)) => {
                debug!(skipped, "Chat view skipped session events");
                view.scroll_to_bottom();
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
        }
    }
}

fn is_escape(event: &Event) -> bool {
    matches!(event, Event::Key(key) if key.kind == KeyEventKind::Press && key.code == KeyCode::Esc)
}

/// Hand an accepted exchange to the runtime; rejections are silent
fn start<S>(admission: Result<PendingExchange<S>, SendRejected>, view: &mut ChatView)
where
    S: ReplyService + 'static,
{
    if let Ok(pending) = admission {
        view.status_message = None;
        tokio::spawn(pending.complete());
    }
}

/// Handle command execution. Returns `true` when the chat should exit.
fn handle_command<S>(
    controller: &ExchangeController<S>,
    options: &ChatOptions,
    view: &mut ChatView,
    input: &str,
) -> bool
where
    S: ReplyService + 'static,
{
    match parse_command(input) {
        CommandResult::None => {}
        CommandResult::ShowHelp => view.show_help = true,
        CommandResult::Export => {
            let result = options.exporter.write(&controller.session());
            match result {
                Ok(path) => {
                    info!(path = %path.display(), "Conversation exported");
                    view.set_status(format!("Saved to {}", path.display()));
                }
                Err(envchat_core::ExportError::EmptyHistory) => {
                    view.set_status("Nothing to export yet");
                }
                Err(err) => {
                    warn!(error = %err, "Export failed");
                    view.set_status(format!("Export failed: {err}"));
                }
            }
        }
        CommandResult::Clear => {
            if controller.session().history().is_empty() {
                view.set_status("Nothing to clear");
            } else if controller.clear_history() {
                view.set_status("Conversation cleared");
            } else {
                view.set_status("Wait for the reply before clearing");
            }
        }
        CommandResult::Exit => return true,
        CommandResult::Unknown(cmd) => {
            view.set_status(format!("Unknown command: /{cmd}. Type /help for commands."));
        }
    }
    false
}
