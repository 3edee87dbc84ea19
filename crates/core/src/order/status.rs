use super::OrderStatus;

/// Map a source status label to its canonical status.
///
/// Matching is exact and case-sensitive. Unrecognized labels, including the
/// empty string, are treated as still in progress.
pub fn normalize_status(raw: &str) -> OrderStatus {
    match raw {
        "Delivered" | "Received" => OrderStatus::Delivered,
        "Out for delivery" => OrderStatus::OutForDelivery,
        "In route from warehouse" => OrderStatus::InRoute,
        "In Process" => OrderStatus::InProcess,
        "cancelled" => OrderStatus::Cancelled,
        _ => OrderStatus::InProcess,
    }
}
