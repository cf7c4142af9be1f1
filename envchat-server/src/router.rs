use crate::error::ServerError;
use crate::routes;
use crate::state::ServerState;
use crate::upstream::ModelClient;
use axum::Router;
use axum::http::Method;
use axum::routing::post;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

/// Build the relay router
pub fn router<C>(client: Arc<C>) -> Router
where
    C: ModelClient + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    let state = Arc::new(ServerState::new(client));
    Router::new()
        .route("/chat", post(routes::chat::chat_handler::<C>))
        .layer(cors)
        .with_state(state)
}

pub async fn serve<C>(client: Arc<C>, addr: SocketAddr) -> Result<(), ServerError>
where
    C: ModelClient + 'static,
{
    info!(%addr, "Binding relay server");
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    serve_on(listener, client).await
}

/// Serve on an already bound listener
pub async fn serve_on<C>(listener: TcpListener, client: Arc<C>) -> Result<(), ServerError>
where
    C: ModelClient + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "Relay server ready to accept connections");
    }
    axum::serve(listener, router(client).into_make_service())
        .await
        .map_err(ServerError::Serve)
}
