//! Read-only views over an order collection.
//!
//! Nothing here mutates its input and every result is freshly allocated.
//! Filters that match nothing produce empty views with zero counts.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::order::{ExhibitorSummary, Order, OrderStats};

/// Orders of one exhibitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExhibitorOrders {
    /// Exhibitor name as requested.
    pub exhibitor: String,
    pub orders: Vec<Order>,
    pub total_orders: usize,
    pub delivered_orders: usize,
}

/// Orders delivered to one booth.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoothOrders {
    pub booth: String,
    pub orders: Vec<Order>,
    pub total_orders: usize,
}

/// One summary per distinct exhibitor, in order of first appearance.
///
/// The summary's booth is the booth of the exhibitor's first order; later
/// orders with a different booth are counted but do not change it.
pub fn summarize_exhibitors(orders: &[Order]) -> Vec<ExhibitorSummary> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut summaries: Vec<ExhibitorSummary> = Vec::new();

    for order in orders {
        let slot = *index.entry(order.exhibitor_name.as_str()).or_insert_with(|| {
            summaries.push(ExhibitorSummary {
                name: order.exhibitor_name.clone(),
                booth: order.booth_number.clone(),
                total_orders: 0,
                delivered_orders: 0,
            });
            summaries.len() - 1
        });

        let summary = &mut summaries[slot];
        summary.total_orders += 1;
        if order.is_delivered() {
            summary.delivered_orders += 1;
        }
    }

    summaries
}

/// Orders for an exact booth number.
pub fn orders_for_booth(orders: &[Order], booth: &str) -> Vec<Order> {
    orders
        .iter()
        .filter(|o| o.booth_number == booth)
        .cloned()
        .collect()
}

/// Orders for an exhibitor, matching the name case-insensitively.
pub fn orders_for_exhibitor(orders: &[Order], exhibitor: &str) -> Vec<Order> {
    let wanted = exhibitor.to_lowercase();
    orders
        .iter()
        .filter(|o| o.exhibitor_name.to_lowercase() == wanted)
        .cloned()
        .collect()
}

/// Exhibitor view with counts.
pub fn exhibitor_orders(orders: &[Order], exhibitor: &str) -> ExhibitorOrders {
    let orders = orders_for_exhibitor(orders, exhibitor);
    let delivered_orders = orders.iter().filter(|o| o.is_delivered()).count();
    ExhibitorOrders {
        exhibitor: exhibitor.to_string(),
        total_orders: orders.len(),
        delivered_orders,
        orders,
    }
}

/// Booth view with counts.
pub fn booth_orders(orders: &[Order], booth: &str) -> BoothOrders {
    let orders = orders_for_booth(orders, booth);
    BoothOrders {
        booth: booth.to_string(),
        total_orders: orders.len(),
        orders,
    }
}

/// Counts per canonical status, computed in one pass.
pub fn order_stats(orders: &[Order]) -> OrderStats {
    orders.iter().fold(OrderStats::default(), |mut stats, order| {
        stats.record(order.status);
        stats
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{synthetic_orders, OrderStatus};
    use crate::testing::fixtures;

    fn sample() -> Vec<Order> {
        vec![
            fixtures::order("1", "Acme", "A-1", OrderStatus::Delivered),
            fixtures::order("2", "Beta", "B-2", OrderStatus::InRoute),
            fixtures::order("3", "Acme", "A-9", OrderStatus::InProcess),
            fixtures::order("4", "acme", "A-1", OrderStatus::Delivered),
            fixtures::order("5", "Beta", "B-2", OrderStatus::Cancelled),
        ]
    }

    #[test]
    fn test_summaries_in_first_seen_order() {
        let summaries = summarize_exhibitors(&sample());
        let names: Vec<&str> = summaries.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Acme", "Beta", "acme"]);

        assert_eq!(summaries[0].total_orders, 2);
        assert_eq!(summaries[0].delivered_orders, 1);
        assert_eq!(summaries[1].total_orders, 2);
        assert_eq!(summaries[1].delivered_orders, 0);
    }

    #[test]
    fn test_summary_booth_is_first_seen() {
        let summaries = summarize_exhibitors(&sample());
        assert_eq!(summaries[0].booth, "A-1");
    }

    #[test]
    fn test_summaries_are_idempotent() {
        let orders = sample();
        let before = orders.clone();
        assert_eq!(summarize_exhibitors(&orders), summarize_exhibitors(&orders));
        assert_eq!(orders, before);
    }

    #[test]
    fn test_synthetic_summaries() {
        let summaries = summarize_exhibitors(&synthetic_orders());
        assert_eq!(summaries.len(), 3);
        assert_eq!(summaries[0].name, "TechFlow Innovations");
        assert_eq!(summaries[0].booth, "A-245");
        assert_eq!(summaries[0].total_orders, 2);
        assert_eq!(summaries[1].delivered_orders, 1);
    }

    #[test]
    fn test_booth_filter_is_exact() {
        let orders = sample();
        assert_eq!(orders_for_booth(&orders, "A-1").len(), 2);
        assert!(orders_for_booth(&orders, "a-1").is_empty());
        assert!(orders_for_booth(&orders, "A-").is_empty());
    }

    #[test]
    fn test_exhibitor_filter_is_case_insensitive() {
        let orders = synthetic_orders();
        let matched = orders_for_exhibitor(&orders, "techflow innovations");
        assert_eq!(matched.len(), 2);
        assert!(matched
            .iter()
            .all(|o| o.exhibitor_name == "TechFlow Innovations"));

        assert!(orders_for_exhibitor(&orders, "techflow").is_empty());
    }

    #[test]
    fn test_exhibitor_view_counts() {
        let view = exhibitor_orders(&sample(), "ACME");
        assert_eq!(view.exhibitor, "ACME");
        assert_eq!(view.total_orders, 3);
        assert_eq!(view.delivered_orders, 2);
    }

    #[test]
    fn test_no_match_views_are_zeroed() {
        let view = exhibitor_orders(&sample(), "Nobody");
        assert!(view.orders.is_empty());
        assert_eq!(view.total_orders, 0);
        assert_eq!(view.delivered_orders, 0);

        let view = booth_orders(&sample(), "Z-0");
        assert!(view.orders.is_empty());
        assert_eq!(view.total_orders, 0);
    }

    #[test]
    fn test_stats_partition_total() {
        let stats = order_stats(&sample());
        assert_eq!(stats.total_orders, 5);
        assert_eq!(stats.delivered, 2);
        assert_eq!(stats.in_route, 1);
        assert_eq!(stats.in_process, 1);
        assert_eq!(stats.cancelled, 1);
        assert_eq!(stats.out_for_delivery, 0);
        assert_eq!(
            stats.delivered
                + stats.in_process
                + stats.in_route
                + stats.out_for_delivery
                + stats.cancelled,
            stats.total_orders
        );
    }

    #[test]
    fn test_stats_empty() {
        assert_eq!(order_stats(&[]), OrderStats::default());
    }
}
