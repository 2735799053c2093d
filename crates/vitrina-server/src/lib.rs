//! HTTP surface of the contact relay
//!
//! A deliberately small axum app: a health probe, the submission endpoint
//! the landing page posts to, and a JSON 404 for everything else. CORS is
//! wide open because the page is served as static files from wherever is
//! convenient.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::Utc;
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use vitrina_core::{Error, Result, Submission, TelegramClient};

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub relay: TelegramClient,
}

/// Assemble the relay router
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/send-message", post(send_message))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind `addr` and serve until the process is stopped
pub async fn serve(addr: &str, state: Arc<AppState>) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Relay listening on {}", addr);
    axum::serve(listener, build_router(state)).await?;
    Ok(())
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "vitrina-relay"
    }))
}

async fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}

async fn send_message(
    State(state): State<Arc<AppState>>,
    body: String,
) -> (StatusCode, Json<Value>) {
    // Parsed by hand so a broken payload still gets the contract's error
    // shape instead of the extractor's plain-text reply.
    let submission: Submission = match serde_json::from_str(&body) {
        Ok(submission) => submission,
        Err(e) => {
            warn!("Rejecting unparseable submission: {}", e);
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "success": false, "error": "Invalid request body" })),
            );
        }
    };

    let text = submission.to_text(Utc::now());
    match state.relay.send_message(&text).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "success": true, "message": "Message sent" })),
        ),
        Err(Error::Telegram(description)) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "success": false, "error": description })),
        ),
        Err(e) => {
            warn!("Could not reach Telegram: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "success": false, "error": "Failed to send message" })),
            )
        }
    }
}
