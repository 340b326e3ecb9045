//! HTTP API server exposing the load-video and ask operations.
//!
//! Each request runs as its own task; the orchestrator's session state is
//! the only shared resource, and its snapshot semantics mean an `ask` racing
//! a `load-video` is served by whichever pipeline was active when it read
//! the slot.

use crate::cli::Output;
use crate::config::Settings;
use crate::error::VidqaError;
use crate::orchestrator::Orchestrator;
use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Shared application state.
struct AppState {
    orchestrator: Orchestrator,
}

/// Run the HTTP API server.
pub async fn run_serve(host: &str, port: u16, settings: Settings) -> anyhow::Result<()> {
    let orchestrator = Orchestrator::new(settings)?;
    let state = Arc::new(AppState { orchestrator });

    let app = router(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    Output::header("Vidqa API Server");
    println!();
    Output::success(&format!("Listening on http://{}", addr));
    println!();
    println!("Endpoints:");
    Output::kv("Health", "GET  /health");
    Output::kv("Load video", "POST /load-video");
    Output::kv("Ask", "POST /ask");
    println!();
    Output::info("Press Ctrl+C to stop the server.");

    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the application router.
fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/load-video", post(load_video))
        .route("/ask", post(ask))
        .layer(cors)
        .with_state(state)
}

// === Request/Response Types ===

#[derive(Deserialize)]
struct LoadVideoRequest {
    video_url: String,
}

#[derive(Serialize)]
struct LoadVideoResponse {
    status: String,
}

#[derive(Deserialize)]
struct AskRequest {
    question: String,
}

#[derive(Serialize)]
struct AskResponse {
    answer: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// Map an ask-path error to an HTTP status.
///
/// Session and input mistakes are 400s the client is expected to show the
/// user; provider failures during retrieval or generation are 500s. The
/// load path has no such split: every load failure is an ingestion failure
/// and its handler answers 400 across the board.
fn ask_status(error: &VidqaError) -> StatusCode {
    match error {
        VidqaError::NoActiveSession | VidqaError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

// === Handlers ===

async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    match state.orchestrator.session().current() {
        Some(pipeline) => Json(serde_json::json!({
            "status": "ok",
            "video_id": pipeline.video_id,
            "loaded_at": pipeline.loaded_at.to_rfc3339(),
        })),
        None => Json(serde_json::json!({ "status": "ok" })),
    }
}

async fn load_video(
    State(state): State<Arc<AppState>>,
    Form(req): Form<LoadVideoRequest>,
) -> impl IntoResponse {
    match state.orchestrator.load_video(&req.video_url).await {
        Ok(_) => Json(LoadVideoResponse {
            status: "ok".to_string(),
        })
        .into_response(),
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
    }
}

async fn ask(
    State(state): State<Arc<AppState>>,
    Form(req): Form<AskRequest>,
) -> impl IntoResponse {
    match state.orchestrator.ask(&req.question).await {
        Ok(answer) => Json(AskResponse { answer }).into_response(),
        Err(e) => (
            ask_status(&e),
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
    }
}
