//! Fixed demonstration dataset served while the live source is unavailable.

use super::{Order, OrderStatus};

/// The synthetic fallback orders.
///
/// Always the same four records in the same order. Performs no I/O.
pub fn synthetic_orders() -> Vec<Order> {
    vec![
        order(
            "ORD-2025-001",
            "A-245",
            "TechFlow Innovations",
            "Premium Booth Setup Package",
            "Complete booth installation with premium furniture, lighting, and tech setup",
            "White",
            1,
            OrderStatus::OutForDelivery,
            "June 14, 2025",
            "Rush delivery requested",
            "Section A",
        ),
        order(
            "ORD-2025-002",
            "A-245",
            "TechFlow Innovations",
            "Interactive Display System",
            "75\" 4K touchscreen display with interactive software and mounting",
            "Black",
            1,
            OrderStatus::InRoute,
            "June 13, 2025",
            "",
            "Section A",
        ),
        order(
            "ORD-2025-003",
            "B-156",
            "GreenWave Energy",
            "Marketing Materials Bundle",
            "Banners, brochures, business cards, and promotional items",
            "Green",
            5,
            OrderStatus::Delivered,
            "June 12, 2025",
            "Eco-friendly materials requested",
            "Section B",
        ),
        order(
            "ORD-2025-004",
            "C-089",
            "SmartHealth Corp",
            "Audio-Visual Equipment",
            "Professional sound system, microphones, and presentation equipment",
            "White",
            1,
            OrderStatus::InProcess,
            "June 14, 2025",
            "Medical grade equipment required",
            "Section C",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn order(
    id: &str,
    booth_number: &str,
    exhibitor_name: &str,
    item: &str,
    description: &str,
    color: &str,
    quantity: u32,
    status: OrderStatus,
    order_date: &str,
    comments: &str,
    section: &str,
) -> Order {
    Order {
        id: id.to_string(),
        booth_number: booth_number.to_string(),
        exhibitor_name: exhibitor_name.to_string(),
        item: item.to_string(),
        description: description.to_string(),
        color: color.to_string(),
        quantity,
        status,
        order_date: order_date.to_string(),
        comments: comments.to_string(),
        section: section.to_string(),
    }
}
