use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use boothtrack_core::{OrderOrigin, SanitizedConfig};
use serde::Serialize;

use crate::metrics::encode_metrics;
use crate::state::AppState;

/// Error envelope shared by every JSON error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub google_sheets_connected: bool,
}

/// Outcome of a fresh ingestion run.
#[derive(Serialize)]
pub struct IngestionResponse {
    pub connected: bool,
    pub spreadsheet_id: String,
    pub region: String,
    pub origin: OrderOrigin,
    pub order_count: usize,
    pub skipped_rows: usize,
    pub last_updated: String,
}

/// RFC 3339 timestamp attached to every data response.
pub fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: now_rfc3339(),
        google_sheets_connected: state.pipeline().is_connected(),
    })
}

pub async fn get_config(State(state): State<Arc<AppState>>) -> Json<SanitizedConfig> {
    Json(state.sanitized_config())
}

/// GET /api/ingestion
///
/// Run the pipeline once and report where the orders came from.
pub async fn ingestion_status(State(state): State<Arc<AppState>>) -> Json<IngestionResponse> {
    let pipeline = state.pipeline();
    let loaded = pipeline.load().await;

    Json(IngestionResponse {
        connected: pipeline.is_connected(),
        spreadsheet_id: pipeline.spreadsheet_id().to_string(),
        region: pipeline.region().to_string(),
        origin: loaded.origin,
        order_count: loaded.orders.len(),
        skipped_rows: loaded.skipped_rows,
        last_updated: now_rfc3339(),
    })
}

/// GET /metrics
pub async fn metrics() -> impl IntoResponse {
    match encode_metrics() {
        Ok(body) => (
            StatusCode::OK,
            [("content-type", "text/plain; version=0.0.4")],
            body,
        )
            .into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
    }
}

/// Fallback for unknown routes.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_string(),
        }),
    )
}
