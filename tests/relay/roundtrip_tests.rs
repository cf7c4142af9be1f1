//! Client and relay wired together over real sockets

use async_trait::async_trait;
use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::post;
use envchat_core::constants::APOLOGY;
use envchat_core::{
    ExchangeController, ExchangeOutcome, HttpReplyService, ReplyError, ReplyService, SubmitOrigin,
};
use envchat_server::{ModelClient, UpstreamError, serve_on};
use envchat_session::Session;
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// Upstream stand-in that records what it was asked
#[derive(Default)]
struct StubModel {
    seen: Mutex<Vec<String>>,
    fail: bool,
}

#[async_trait]
impl ModelClient for StubModel {
    async fn complete(&self, message: &str) -> Result<String, UpstreamError> {
        self.seen
            .lock()
            .expect("lock")
            .push(message.to_string());
        if self.fail {
            Err(UpstreamError::invalid_response("no choices"))
        } else {
            Ok(format!("Nuclear answer: {message}"))
        }
    }
}

async fn spawn_relay(model: Arc<StubModel>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(serve_on(listener, model));
    addr
}

async fn spawn_router(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    addr
}

#[tokio::test]
async fn exchange_round_trips_through_relay() {
    let model = Arc::new(StubModel::default());
    let addr = spawn_relay(Arc::clone(&model)).await;

    let service = HttpReplyService::new(&format!("http://{addr}"));
    assert_eq!(service.endpoint(), format!("http://{addr}/chat"));
    let controller = ExchangeController::new(Session::new(), service);

    let outcome = controller
        .send("What is nuclear energy?", SubmitOrigin::Preset)
        .await
        .expect("accepted");

    assert!(matches!(outcome, ExchangeOutcome::Replied(_)));
    assert_eq!(outcome.message().text, "Nuclear answer: What is nuclear energy?");
    assert_eq!(
        *model.seen.lock().expect("lock"),
        vec!["What is nuclear energy?".to_string()]
    );
    assert_eq!(
        controller.export_text(),
        "You: What is nuclear energy?\n\nAssistant: Nuclear answer: What is nuclear energy?"
    );
}

#[tokio::test]
async fn trailing_slash_base_url_hits_same_endpoint() {
    let addr = spawn_relay(Arc::new(StubModel::default())).await;
    let service = HttpReplyService::new(&format!("http://{addr}/"));
    let reply = service.reply("hi").await.expect("reply");
    assert_eq!(reply, "Nuclear answer: hi");
}

#[tokio::test]
async fn relay_rejects_empty_message() {
    let model = Arc::new(StubModel::default());
    let addr = spawn_relay(Arc::clone(&model)).await;

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/chat"))
        .json(&json!({ "message": "   " }))
        .send()
        .await
        .expect("send");

    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("json");
    assert!(body["error"].is_string());
    assert!(model.seen.lock().expect("lock").is_empty());
}

#[tokio::test]
async fn upstream_failure_becomes_bad_gateway_and_apology() {
    let model = Arc::new(StubModel {
        fail: true,
        ..StubModel::default()
    });
    let addr = spawn_relay(model).await;

    let service = HttpReplyService::new(&format!("http://{addr}"));
    let err = service.reply("hello").await.expect_err("should fail");
    assert!(matches!(
        err,
        ReplyError::Status { status, .. } if status == reqwest::StatusCode::BAD_GATEWAY
    ));

    let controller = ExchangeController::new(Session::new(), service);
    let outcome = controller
        .send("hello", SubmitOrigin::Preset)
        .await
        .expect("accepted");
    assert!(outcome.is_failure());
    assert_eq!(outcome.message().text, APOLOGY);
    assert!(!controller.session().is_busy());
}

#[tokio::test]
async fn missing_reply_field_is_a_failure() {
    let router = Router::new().route(
        "/chat",
        post(|| async { Json(json!({ "answer": "wrong key" })) }),
    );
    let addr = spawn_router(router).await;

    let service = HttpReplyService::new(&format!("http://{addr}"));
    let err = service.reply("hello").await.expect_err("should fail");
    assert!(matches!(err, ReplyError::InvalidResponse { .. }));
}

#[tokio::test]
async fn server_error_status_is_a_failure() {
    let router = Router::new().route(
        "/chat",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let addr = spawn_router(router).await;

    let controller = ExchangeController::new(
        Session::new(),
        HttpReplyService::new(&format!("http://{addr}")),
    );
    let outcome = controller
        .send("hello", SubmitOrigin::Preset)
        .await
        .expect("accepted");
    assert_eq!(outcome.message().text, APOLOGY);
}

#[tokio::test]
async fn unreachable_service_yields_apology() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let service = HttpReplyService::new(&format!("http://{addr}"));
    let err = service.reply("hello").await.expect_err("should fail");
    assert!(matches!(err, ReplyError::Network { .. }));

    let controller = ExchangeController::new(Session::new(), service);
    let outcome = controller
        .send("hello", SubmitOrigin::Preset)
        .await
        .expect("accepted");
    assert!(outcome.is_failure());
    let session = controller.session();
    assert_eq!(session.history().len(), 2);
    assert_eq!(session.history()[1].text, APOLOGY);
    assert!(!session.is_busy());
}
