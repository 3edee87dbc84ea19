use std::sync::Arc;

use axum::{extract::State, Json};
use boothtrack_core::{summarize_exhibitors, ExhibitorSummary};

use crate::state::AppState;

/// GET /api/exhibitors
///
/// One summary per exhibitor, in order of first appearance.
pub async fn list_exhibitors(State(state): State<Arc<AppState>>) -> Json<Vec<ExhibitorSummary>> {
    let orders = state.pipeline().load_orders().await;
    Json(summarize_exhibitors(&orders))
}
