//! Transcript export after real exchanges

use async_trait::async_trait;
use envchat_core::config::ExportConfig;
use envchat_core::{
    ExchangeController, ExportError, ReplyError, ReplyService, SubmitOrigin, TranscriptExporter,
};
use envchat_session::Session;
use std::fs;
use tempfile::tempdir;

struct Canned;

#[async_trait]
impl ReplyService for Canned {
    async fn reply(&self, message: &str) -> Result<String, ReplyError> {
        Ok(format!("About {message}: it is low-carbon."))
    }
}

fn exporter_in(dir: &std::path::Path) -> TranscriptExporter {
    TranscriptExporter::from_config(&ExportConfig {
        directory: dir.to_string_lossy().to_string(),
        file_name: "nuclear-environment-chat.txt".to_string(),
    })
}

#[tokio::test]
async fn export_matches_transcript_of_exchanges() {
    let dir = tempdir().expect("tempdir");
    let controller = ExchangeController::new(Session::new(), Canned);
    controller
        .send("nuclear power", SubmitOrigin::Preset)
        .await
        .expect("accepted");

    let path = exporter_in(dir.path())
        .write(&controller.session())
        .expect("export");

    let written = fs::read_to_string(&path).expect("read");
    assert_eq!(
        written,
        "You: nuclear power\n\nAssistant: About nuclear power: it is low-carbon."
    );
    assert_eq!(written, controller.export_text());
}

#[tokio::test]
async fn export_overwrites_previous_file() {
    let dir = tempdir().expect("tempdir");
    let exporter = exporter_in(dir.path());
    let controller = ExchangeController::new(Session::new(), Canned);

    controller.send("first", SubmitOrigin::Preset).await.expect("accepted");
    exporter.write(&controller.session()).expect("export");

    assert!(controller.clear_history());
    controller.send("second", SubmitOrigin::Preset).await.expect("accepted");
    let path = exporter.write(&controller.session()).expect("export");

    let written = fs::read_to_string(path).expect("read");
    assert!(written.starts_with("You: second"));
    assert!(!written.contains("first"));
}

#[test]
fn export_of_empty_session_writes_nothing() {
    let dir = tempdir().expect("tempdir");
    let exporter = exporter_in(dir.path());

    let result = exporter.write(&Session::new());

    assert!(matches!(result, Err(ExportError::EmptyHistory)));
    assert!(fs::read_dir(dir.path()).expect("read_dir").next().is_none());
}

#[test]
fn export_keeps_unicode_verbatim() {
    let dir = tempdir().expect("tempdir");
    let mut session = Session::new();
    session.append_message(envchat_session::Message::user("CO₂ per kWh?"));
    session.append_message(envchat_session::Message::bot("About 12 g, very low 🌱"));

    let path = exporter_in(dir.path()).write(&session).expect("export");

    assert_eq!(
        fs::read_to_string(path).expect("read"),
        "You: CO₂ per kWh?\n\nAssistant: About 12 g, very low 🌱"
    );
}
