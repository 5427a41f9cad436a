use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use log::{error, info, warn};
use serde::Serialize;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::agent::{AgentError, CareBot};
use crate::models::chat::{ChatRequest, ChatResponse};

#[derive(Clone)]
struct AppState {
    bot: Arc<CareBot>,
}

#[derive(Serialize)]
struct StatusResponse {
    status: &'static str,
    message: &'static str,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: String,
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

/// Uniform server-error shape: every completion failure becomes a 500 with
/// the underlying detail text.
pub struct ApiError(AgentError);

impl From<AgentError> for ApiError {
    fn from(e: AgentError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("Chat request failed: {}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody {
                detail: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

pub fn router(bot: Arc<CareBot>, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/chat", post(chat_handler))
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/clear", post(clear_handler))
        .layer(cors_layer(cors_origins))
        .with_state(AppState { bot })
}

/// With no configured origins every request origin is mirrored back with
/// credentials allowed, matching the original deployment's placeholder
/// posture. Configured origins restrict the allow-list while keeping
/// mirrored methods and headers.
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::very_permissive();
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring invalid CORS origin {:?}: {}", origin, e);
                None
            }
        })
        .collect();

    CorsLayer::very_permissive().allow_origin(AllowOrigin::list(parsed))
}

async fn chat_handler(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    info!("Chat request received ({} chars)", req.message.len());
    let reply = state.bot.process_message(&req.message).await?;
    Ok(Json(ChatResponse {
        response: reply,
        timestamp: Utc::now().to_rfc3339(),
    }))
}

async fn root_handler() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "online",
        message: "Customer Care Bot API is running",
    })
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339(),
    })
}

async fn clear_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    state.bot.clear_history().await;
    info!("Conversation history cleared");
    Json(StatusResponse {
        status: "success",
        message: "Conversation history cleared",
    })
}
