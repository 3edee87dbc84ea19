//! Order API handlers.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use boothtrack_core::{booth_orders, exhibitor_orders, BoothOrders, ExhibitorOrders, Order};
use serde::Serialize;
use tracing::debug;

use super::handlers::now_rfc3339;
use crate::state::AppState;

// ============================================================================
// Response types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ExhibitorOrdersResponse {
    #[serde(flatten)]
    pub view: ExhibitorOrders,
    pub last_updated: String,
}

#[derive(Debug, Serialize)]
pub struct BoothOrdersResponse {
    #[serde(flatten)]
    pub view: BoothOrders,
    pub last_updated: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/orders
///
/// All current orders, in source order.
pub async fn list_orders(State(state): State<Arc<AppState>>) -> Json<Vec<Order>> {
    Json(state.pipeline().load_orders().await)
}

/// GET /api/orders/exhibitor/{name}
///
/// Orders of one exhibitor. The name matches case-insensitively; an unknown
/// exhibitor yields an empty list, not an error.
pub async fn orders_by_exhibitor(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Json<ExhibitorOrdersResponse> {
    let orders = state.pipeline().load_orders().await;
    let view = exhibitor_orders(&orders, &name);
    debug!(exhibitor = %name, matched = view.total_orders, "Exhibitor lookup");

    Json(ExhibitorOrdersResponse {
        view,
        last_updated: now_rfc3339(),
    })
}

/// GET /api/orders/booth/{booth}
///
/// Orders delivered to an exact booth number.
pub async fn orders_by_booth(
    State(state): State<Arc<AppState>>,
    Path(booth): Path<String>,
) -> Json<BoothOrdersResponse> {
    let orders = state.pipeline().load_orders().await;
    let view = booth_orders(&orders, &booth);
    debug!(booth = %booth, matched = view.total_orders, "Booth lookup");

    Json(BoothOrdersResponse {
        view,
        last_updated: now_rfc3339(),
    })
}
