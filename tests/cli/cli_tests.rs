//! Command line parsing and chat key handling

use clap::Parser;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use envchat_cli::tui::chat::{CommandResult, InputAction, handle_input, parse_command, truncate_label};
use envchat_cli::{Cli, Command};
use envchat_session::Session;

#[test]
fn no_subcommand_means_chat() {
    let cli = Cli::try_parse_from(["envchat"]).expect("parse");
    assert_eq!(cli.command(), Command::Chat);
    assert!(cli.config.is_none());
    assert!(cli.base_url.is_none());
}

#[test]
fn send_collects_words() {
    let cli = Cli::try_parse_from(["envchat", "send", "What", "is", "fusion?"]).expect("parse");
    match cli.command() {
        Command::Send { text } => assert_eq!(text.join(" "), "What is fusion?"),
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn send_requires_text() {
    assert!(Cli::try_parse_from(["envchat", "send"]).is_err());
}

#[test]
fn global_flags_work_after_subcommand() {
    let cli = Cli::try_parse_from([
        "envchat",
        "serve",
        "--addr",
        "127.0.0.1:9000",
        "--config",
        "custom.toml",
        "--base-url",
        "http://localhost:9000",
    ])
    .expect("parse");

    assert_eq!(cli.config.as_deref(), Some("custom.toml"));
    assert_eq!(cli.base_url.as_deref(), Some("http://localhost:9000"));
    match cli.command() {
        Command::Serve { addr } => assert_eq!(addr, Some("127.0.0.1:9000".parse().expect("addr"))),
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn serve_rejects_invalid_addr() {
    assert!(Cli::try_parse_from(["envchat", "serve", "--addr", "nowhere"]).is_err());
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn typed_message_then_enter_submits() {
    let mut session = Session::new();
    for c in "Is nuclear clean?".chars() {
        assert_eq!(handle_input(&mut session, key(KeyCode::Char(c))), InputAction::None);
    }
    assert_eq!(handle_input(&mut session, key(KeyCode::Enter)), InputAction::Submit);
    assert_eq!(session.pending_input(), "Is nuclear clean?");
}

#[test]
fn slash_commands_parse() {
    assert_eq!(parse_command("/export"), CommandResult::Export);
    assert_eq!(parse_command("/clear"), CommandResult::Clear);
    assert_eq!(parse_command("/help"), CommandResult::ShowHelp);
    assert_eq!(parse_command("/exit"), CommandResult::Exit);
}

#[test]
fn recent_labels_truncate_at_fifty_chars() {
    let question = "How does nuclear energy compare to renewables over a full lifecycle?";
    let label = truncate_label(question, 50);
    assert_eq!(label.chars().count(), 53);
    assert!(label.starts_with("How does nuclear energy compare to renewables over"));
    assert!(label.ends_with("..."));
}
