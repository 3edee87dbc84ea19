//! Canonical order model, status normalization and row parsing.

mod parser;
mod status;
mod synthetic;
mod types;

pub use parser::{columns, parse_order, parse_rows, ParsedOrders, RowParseError};
pub use status::normalize_status;
pub use synthetic::synthetic_orders;
pub use types::*;
