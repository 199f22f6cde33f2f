// HTTP API
// Thin JSON surface over the analyzer: one detection route and a health check

use std::time::Instant;

use anyhow::Result;
use axum::body::Bytes;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};

use crate::models::{AnalysisOutcome, DetectRequest, ErrorBody};
use crate::services::config_store::ServerConfig;
use crate::services::detection::analyze_value;

pub const DETECT_ROUTE: &str = "/api/detect_ai";
pub const HEALTH_ROUTE: &str = "/api/health";

/// Build the application router for the given server settings.
pub fn router(config: &ServerConfig) -> Router {
    let router = Router::new()
        .route(DETECT_ROUTE, post(detect_ai))
        .route(HEALTH_ROUTE, get(health_check))
        .layer(DefaultBodyLimit::max(config.max_body_bytes));

    if config.cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}

fn bad_request(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorBody::new(message))).into_response()
}

/// `POST /api/detect_ai` with `{"text": "..."}`.
pub async fn detect_ai(body: Bytes) -> Response {
    let started = Instant::now();

    let request: DetectRequest = match serde_json::from_slice(&body) {
        Ok(req) => req,
        Err(e) => {
            warn!(error = %e, bytes = body.len(), "api.detect_ai.invalid_body");
            return bad_request("No text provided");
        }
    };

    let Some(text) = request.text else {
        return bad_request("No text provided");
    };
    if text.as_str().is_some_and(|s| s.trim().is_empty()) {
        return bad_request("Empty text provided");
    }

    let outcome = match tokio::task::spawn_blocking(move || analyze_value(&text)).await {
        Ok(outcome) => outcome,
        Err(e) => {
            error!(error = %e, "api.detect_ai.task_failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody::new(e.to_string())))
                .into_response();
        }
    };

    match &outcome {
        AnalysisOutcome::Report(report) => info!(
            ai_percentage = report.ai_percentage,
            highlights = report.highlighted_sections.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "api.detect_ai"
        ),
        AnalysisOutcome::Failed { error } => warn!(
            error = %error,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "api.detect_ai.analysis_error"
        ),
    }

    (StatusCode::OK, Json(outcome)).into_response()
}

/// `GET /api/health`: 200 with an empty body.
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Serve the API until Ctrl-C.
pub async fn serve(config: ServerConfig) -> Result<()> {
    let app = router(&config);
    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;

    info!(addr = %config.bind_addr(), cors = config.cors, "server.listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("server.shutdown_requested");
        })
        .await?;

    Ok(())
}
