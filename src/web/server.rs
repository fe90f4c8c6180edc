//! Axum HTTP server for the web gateway.
//!
//! Serves the form page, the review endpoint and a health check.

use std::any::Any;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{DefaultBodyLimit, State, rejection::BytesRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tokio::sync::{Mutex, oneshot};
use tokio::task::JoinHandle;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::error::{GENERIC_FAILURE_MESSAGE, GatewayError, ReviewError};
use crate::service::{ReviewBundle, ReviewService};
use crate::web::types::{ErrorResponse, HealthResponse, ReviewRequest};

/// Request bodies only ever carry one short string.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Shared, read-only state for all handlers.
pub struct GatewayState {
    pub reviewer: ReviewService,
    /// Shutdown signal sender, populated by [`start_server`].
    pub shutdown_tx: tokio::sync::RwLock<Option<oneshot::Sender<()>>>,
    /// Serve loop spawned by [`start_server`].
    server_task: Mutex<Option<JoinHandle<()>>>,
}

impl GatewayState {
    pub fn new(reviewer: ReviewService) -> Self {
        Self {
            reviewer,
            shutdown_tx: tokio::sync::RwLock::new(None),
            server_task: Mutex::new(None),
        }
    }

    /// Stop a running server and wait until in-flight requests have drained.
    /// Returns `false` if none was started or it was already asked.
    pub async fn shutdown(&self) -> bool {
        let signalled = match self.shutdown_tx.write().await.take() {
            Some(tx) => tx.send(()).is_ok(),
            None => false,
        };
        if let Some(task) = self.server_task.lock().await.take()
            && let Err(e) = task.await
        {
            tracing::error!("Web gateway task failed: {}", e);
        }
        signalled
    }
}

/// Build the gateway router.
pub fn router(state: Arc<GatewayState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/health", get(health_handler))
        .route("/api/review", post(review_handler))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            header::HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_FRAME_OPTIONS,
            header::HeaderValue::from_static("DENY"),
        ))
        .with_state(state)
}

/// Start the gateway HTTP server.
///
/// Returns the actual bound `SocketAddr` (useful when binding to port 0).
/// The server runs in the background until [`GatewayState::shutdown`],
/// which also waits for it to finish.
pub async fn start_server(
    addr: SocketAddr,
    state: Arc<GatewayState>,
) -> Result<SocketAddr, GatewayError> {
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        GatewayError::StartupFailed {
            reason: format!("Failed to bind to {}: {}", addr, e),
        }
    })?;
    let bound_addr = listener
        .local_addr()
        .map_err(|e| GatewayError::StartupFailed {
            reason: format!("Failed to get local addr: {}", e),
        })?;

    let app = router(state.clone());

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    *state.shutdown_tx.write().await = Some(shutdown_tx);

    let task = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
                tracing::info!("Web gateway shutting down");
            })
            .await
        {
            tracing::error!("Web gateway server error: {}", e);
        }
    });
    *state.server_task.lock().await = Some(task);

    tracing::info!(addr = %bound_addr, source = state.reviewer.source_name(), "Web gateway listening");
    Ok(bound_addr)
}

// --- Static page ---

async fn index_handler() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8"),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        include_str!("static/index.html"),
    )
}

// --- Health ---

async fn health_handler(State(state): State<Arc<GatewayState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        source: state.reviewer.source_name().to_string(),
    })
}

// --- Review ---

fn error_response(status: StatusCode, message: impl Into<String>) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

fn map_review_error(err: ReviewError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match err {
        ReviewError::MissingInput => StatusCode::BAD_REQUEST,
        ReviewError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status.is_server_error() {
        tracing::error!(error = %err, "Review request failed");
    } else {
        tracing::debug!(error = %err, "Review request rejected");
    }
    error_response(status, err.to_string())
}

/// Only `null` and malformed JSON fail here. Any other non-object value
/// carries no `profileUrl` and is left for the missing-input check.
fn parse_review_request(body: &[u8]) -> Result<ReviewRequest, ReviewError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ReviewRequest::default());
    }
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|e| ReviewError::Unexpected(e.to_string()))?;
    match value {
        serde_json::Value::Null => Err(ReviewError::Unexpected(
            "Request body must not be null".to_string(),
        )),
        serde_json::Value::Object(_) => {
            serde_json::from_value(value).map_err(|e| ReviewError::Unexpected(e.to_string()))
        }
        _ => Ok(ReviewRequest::default()),
    }
}

async fn review_handler(
    State(state): State<Arc<GatewayState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ReviewBundle>, (StatusCode, Json<ErrorResponse>)> {
    let body = body.map_err(|rejection| {
        tracing::warn!(status = %rejection.status(), "Review body rejected");
        error_response(rejection.status(), rejection.body_text())
    })?;
    let req = parse_review_request(&body).map_err(map_review_error)?;

    state
        .reviewer
        .review(req.profile_url.as_deref())
        .await
        .map(Json)
        .map_err(map_review_error)
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = detail, "Gateway handler panicked");
    error_response(StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE_MESSAGE).into_response()
}
