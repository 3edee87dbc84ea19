//! Canonical order model and derived aggregates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical fulfillment status.
///
/// Serialized as the kebab-case wire name (`"out-for-delivery"` etc.). Source
/// labels never reach this type directly; see [`super::normalize_status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    Delivered,
    OutForDelivery,
    InRoute,
    InProcess,
    Cancelled,
}

impl OrderStatus {
    /// Every canonical status, in reporting order.
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Delivered,
        OrderStatus::OutForDelivery,
        OrderStatus::InRoute,
        OrderStatus::InProcess,
        OrderStatus::Cancelled,
    ];

    /// Wire name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Delivered => "delivered",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::InRoute => "in-route",
            OrderStatus::InProcess => "in-process",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single exhibitor order for booth services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Order identifier, stable for the same source row.
    pub id: String,
    /// Booth the order is delivered to.
    pub booth_number: String,
    /// Exhibitor that placed the order.
    pub exhibitor_name: String,
    pub item: String,
    pub description: String,
    pub color: String,
    pub quantity: u32,
    pub status: OrderStatus,
    /// Display date as entered at the source; never parsed.
    pub order_date: String,
    /// Free-form notes, empty when none were entered.
    pub comments: String,
    pub section: String,
}

impl Order {
    pub fn is_delivered(&self) -> bool {
        self.status == OrderStatus::Delivered
    }
}

/// Per-exhibitor rollup derived from the current order collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExhibitorSummary {
    pub name: String,
    /// Booth of the first order seen for this exhibitor.
    pub booth: String,
    pub total_orders: usize,
    pub delivered_orders: usize,
}

/// Order counts by canonical status.
///
/// The five status counters always sum to `total_orders`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderStats {
    pub total_orders: usize,
    pub delivered: usize,
    pub in_process: usize,
    pub in_route: usize,
    pub out_for_delivery: usize,
    pub cancelled: usize,
}

impl OrderStats {
    /// Count for a single status.
    pub fn count(&self, status: OrderStatus) -> usize {
        match status {
            OrderStatus::Delivered => self.delivered,
            OrderStatus::OutForDelivery => self.out_for_delivery,
            OrderStatus::InRoute => self.in_route,
            OrderStatus::InProcess => self.in_process,
            OrderStatus::Cancelled => self.cancelled,
        }
    }

    pub(crate) fn record(&mut self, status: OrderStatus) {
        self.total_orders += 1;
        let counter = match status {
            OrderStatus::Delivered => &mut self.delivered,
            OrderStatus::OutForDelivery => &mut self.out_for_delivery,
            OrderStatus::InRoute => &mut self.in_route,
            OrderStatus::InProcess => &mut self.in_process,
            OrderStatus::Cancelled => &mut self.cancelled,
        };
        *counter += 1;
    }
}
