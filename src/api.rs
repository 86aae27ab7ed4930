use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info};

use crate::config::AppConfig;
use crate::error::SandboxError;
use crate::rng::ThreadRandom;
use crate::services::chat::ChatResponder;
use crate::services::market::MarketSimulator;

pub struct AppState {
    pub simulator: MarketSimulator,
    pub chat: ChatResponder,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            simulator: MarketSimulator::new(config.market.clone()),
            chat: ChatResponder::new(config.chat.clone()),
            config,
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/coins-demo", get(coins_demo))
        .route("/api/chat-sandbox", post(chat_sandbox))
        .with_state(state)
}

pub async fn run_server(state: Arc<AppState>) -> Result<(), SandboxError> {
    let addr = format!("0.0.0.0:{}", state.config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("API Server listening on {}", addr);
    axum::serve(listener, router(state)).await?;
    Ok(())
}

async fn coins_demo(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut rng = ThreadRandom;
    match state.simulator.generate_catalog(&mut rng) {
        Ok(coins) => Json(json!({
            "success": true,
            "data": coins,
            "timestamp": Utc::now().to_rfc3339(),
        }))
        .into_response(),
        Err(e) => error_response("coins-demo", e),
    }
}

#[derive(Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
}

async fn chat_sandbox(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> impl IntoResponse {
    let message = request.message.unwrap_or_default();
    let mut rng = ThreadRandom;

    match state.chat.answer(&mut rng, &message).await {
        Ok(answer) => Json(json!({
            "success": true,
            "response": answer.response,
            "timestamp": Utc::now().to_rfc3339(),
            "analysisMetadata": answer.metadata,
        }))
        .into_response(),
        Err(e) => error_response("chat-sandbox", e),
    }
}

/// Validation errors are the caller's; everything else is logged and
/// reported generically without internal detail.
fn error_response(endpoint: &str, err: SandboxError) -> axum::response::Response {
    if err.is_client_error() {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Message is required"})),
        )
            .into_response()
    } else {
        error!("{} failed: {}", endpoint, err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "Internal server error"})),
        )
            .into_response()
    }
}
