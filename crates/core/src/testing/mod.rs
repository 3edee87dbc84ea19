//! Testing utilities and mock implementations.
//!
//! Provides a mock [`TabularSource`](crate::source::TabularSource) so the
//! ingestion pipeline and the HTTP layer can be exercised without a live
//! spreadsheet.
//!
//! # Example
//!
//! ```rust,ignore
//! use boothtrack_core::testing::{fixtures, MockTabularSource};
//!
//! let source = MockTabularSource::new();
//! source.set_rows(vec![fixtures::order_row(2, "ORD-1", "Acme", "A-1", "Delivered", 1)]).await;
//! source.set_failing(true).await;
//! ```

mod mock_source;

pub use mock_source::MockTabularSource;

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::order::{Order, OrderStatus};
    use crate::source::SheetRow;

    /// A well-formed sheet row using the spreadsheet's header spellings.
    pub fn order_row(
        row_number: usize,
        id: &str,
        exhibitor: &str,
        booth: &str,
        status: &str,
        quantity: i64,
    ) -> SheetRow {
        SheetRow::new(row_number)
            .with_cell("Order ID", id)
            .with_cell("Booth Number", booth)
            .with_cell("Exhibitor Name", exhibitor)
            .with_cell("Item", "Standard Booth Furniture")
            .with_cell("Description", "Table and two chairs")
            .with_cell("Color", "Black")
            .with_cell("Quantity", quantity)
            .with_cell("Status", status)
            .with_cell("Order Date", "June 14, 2025")
            .with_cell("Comments", "")
            .with_cell("Section", "Section A")
    }

    /// A canonical order with reasonable defaults.
    pub fn order(id: &str, exhibitor: &str, booth: &str, status: OrderStatus) -> Order {
        Order {
            id: id.to_string(),
            booth_number: booth.to_string(),
            exhibitor_name: exhibitor.to_string(),
            item: "Standard Booth Furniture".to_string(),
            description: "Table and two chairs".to_string(),
            color: "Black".to_string(),
            quantity: 1,
            status,
            order_date: "June 14, 2025".to_string(),
            comments: String::new(),
            section: "Section A".to_string(),
        }
    }
}
