use std::sync::Arc;

use axum::{extract::State, Json};
use boothtrack_core::{order_stats, OrderStats};
use serde::Serialize;

use super::handlers::now_rfc3339;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    #[serde(flatten)]
    pub stats: OrderStats,
    pub last_updated: String,
}

/// GET /api/stats
pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<StatsResponse> {
    let orders = state.pipeline().load_orders().await;
    Json(StatsResponse {
        stats: order_stats(&orders),
        last_updated: now_rfc3339(),
    })
}
