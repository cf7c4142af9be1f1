use crate::dto::{ChatRequest, ChatResponse, ErrorResponse};
use crate::state::ServerState;
use crate::upstream::ModelClient;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use std::sync::Arc;
use tracing::{error, info};

pub async fn chat_handler<C: ModelClient>(
    State(state): State<Arc<ServerState<C>>>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, Json<ErrorResponse>)> {
    let ChatRequest { message } = payload;

    info!(chars = message.chars().count(), "Received /chat request");

    if message.trim().is_empty() {
        error!("Rejecting /chat request due to empty message");
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "message cannot be empty".to_string(),
            }),
        ));
    }

    match state.client().complete(&message).await {
        Ok(reply) => {
            info!(chars = reply.chars().count(), "Chat request completed successfully");
            Ok(Json(ChatResponse { reply }))
        }
        Err(error) => {
            error!(%error, "Upstream model returned an error");
            Err((
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: error.user_message(),
                }),
            ))
        }
    }
}
