use crate::types::{AnalyzeRequest, ErrorResponse};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use sentiscope_core::SentimentAnalyzer;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Shared state for the gateway server.
#[derive(Clone)]
struct AppState {
    analyzer: Arc<SentimentAnalyzer>,
}

/// The gateway HTTP server.
///
/// Exposes the analyzer over:
/// - `POST /analyze` — full document profile for `{"text": ...}`
/// - `GET /health` — health check
pub struct GatewayServer {
    analyzer: Arc<SentimentAnalyzer>,
    /// Bind address.
    host: String,
    port: u16,
}

impl GatewayServer {
    pub fn new(analyzer: Arc<SentimentAnalyzer>, host: &str, port: u16) -> Self {
        Self {
            analyzer,
            host: host.to_string(),
            port,
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The routes with state attached, without binding a socket.
    pub fn router(&self) -> Router {
        let state = AppState {
            analyzer: self.analyzer.clone(),
        };
        Router::new()
            .route("/health", get(health))
            .route("/analyze", post(analyze))
            .layer(CorsLayer::permissive())
            .with_state(state)
    }

    /// Bind and serve until the server stops or fails.
    pub async fn serve(self) -> anyhow::Result<()> {
        let addr = self.addr();
        let app = self.router();
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        tracing::info!("Gateway listening on {}", addr);
        axum::serve(listener, app).await?;
        Ok(())
    }

    /// Start the server. This spawns a background task and returns the join handle.
    pub fn start(self) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            if let Err(e) = self.serve().await {
                tracing::error!("Gateway server error: {}", e);
            }
        })
    }
}

// ============================================================================
// Route handlers
// ============================================================================

async fn health() -> &'static str {
    "ok"
}

/// POST /analyze — runs the analyzer on a blocking thread.
async fn analyze(State(state): State<AppState>, Json(req): Json<AnalyzeRequest>) -> Response {
    if req.text.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "No text provided");
    }

    let analyzer = state.analyzer.clone();
    let outcome = tokio::task::spawn_blocking(move || analyzer.analyze(&req.text)).await;

    match outcome {
        Ok(Ok(doc)) => Json(doc).into_response(),
        Ok(Err(e)) => {
            tracing::warn!("Analysis failed: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Analysis failed")
        }
        Err(e) => {
            tracing::error!("Analysis task aborted: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Analysis failed")
        }
    }
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(ErrorResponse::new(message))).into_response()
}
