//! Conversion of raw sheet rows into canonical orders.

use thiserror::Error;
use tracing::warn;

use super::{normalize_status, Order};
use crate::source::{CellValue, SheetRow};

/// Accepted header spellings per field, after header normalization.
pub mod columns {
    pub const ID: &[&str] = &["id", "order_id"];
    pub const BOOTH_NUMBER: &[&str] = &["booth_number", "booth"];
    pub const EXHIBITOR_NAME: &[&str] = &["exhibitor_name", "exhibitor"];
    pub const ITEM: &[&str] = &["item"];
    pub const DESCRIPTION: &[&str] = &["description"];
    pub const COLOR: &[&str] = &["color", "colour"];
    pub const QUANTITY: &[&str] = &["quantity", "qty"];
    pub const STATUS: &[&str] = &["status"];
    pub const ORDER_DATE: &[&str] = &["order_date", "date"];
    pub const COMMENTS: &[&str] = &["comments", "comment", "notes"];
    pub const SECTION: &[&str] = &["section"];
}

/// A single row that could not be turned into an order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowParseError {
    #[error("row {row}: missing required field '{field}'")]
    MissingField { row: usize, field: &'static str },

    #[error("row {row}: invalid quantity '{value}'")]
    InvalidQuantity { row: usize, value: String },
}

impl RowParseError {
    pub fn row(&self) -> usize {
        match self {
            RowParseError::MissingField { row, .. } | RowParseError::InvalidQuantity { row, .. } => {
                *row
            }
        }
    }
}

/// Result of parsing a whole result set.
#[derive(Debug, Clone, Default)]
pub struct ParsedOrders {
    /// Orders from well-formed rows, in source row order.
    pub orders: Vec<Order>,
    /// Rows that were skipped, with the reason.
    pub skipped: Vec<RowParseError>,
}

/// Parse every row, skipping malformed rows.
///
/// A bad row never aborts the batch: it is logged, recorded in
/// [`ParsedOrders::skipped`], and the remaining rows are still parsed.
pub fn parse_rows(rows: &[SheetRow]) -> ParsedOrders {
    let mut parsed = ParsedOrders {
        orders: Vec::with_capacity(rows.len()),
        skipped: Vec::new(),
    };

    for row in rows {
        match parse_order(row) {
            Ok(order) => parsed.orders.push(order),
            Err(e) => {
                warn!(row = e.row(), "Skipping order row: {}", e);
                parsed.skipped.push(e);
            }
        }
    }

    parsed
}

/// Parse one row into an order.
pub fn parse_order(row: &SheetRow) -> Result<Order, RowParseError> {
    let exhibitor_name = required_text(row, columns::EXHIBITOR_NAME, "exhibitor_name")?;
    let booth_number = required_text(row, columns::BOOTH_NUMBER, "booth_number")?;
    let quantity = quantity(row)?;

    let id = optional_text(row, columns::ID)
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| format!("ROW-{}", row.row_number()));

    let status = normalize_status(&optional_text(row, columns::STATUS).unwrap_or_default());

    Ok(Order {
        id,
        booth_number,
        exhibitor_name,
        item: optional_text(row, columns::ITEM).unwrap_or_default(),
        description: optional_text(row, columns::DESCRIPTION).unwrap_or_default(),
        color: optional_text(row, columns::COLOR).unwrap_or_default(),
        quantity,
        status,
        order_date: optional_text(row, columns::ORDER_DATE).unwrap_or_default(),
        comments: optional_text(row, columns::COMMENTS).unwrap_or_default(),
        section: optional_text(row, columns::SECTION).unwrap_or_default(),
    })
}

fn cell<'a>(row: &'a SheetRow, aliases: &[&str]) -> Option<&'a CellValue> {
    aliases
        .iter()
        .filter_map(|alias| row.get(alias))
        .find(|value| !value.is_blank())
}

fn optional_text(row: &SheetRow, aliases: &[&str]) -> Option<String> {
    cell(row, aliases).and_then(CellValue::as_text)
}

fn required_text(
    row: &SheetRow,
    aliases: &[&str],
    field: &'static str,
) -> Result<String, RowParseError> {
    optional_text(row, aliases).ok_or(RowParseError::MissingField {
        row: row.row_number(),
        field,
    })
}

fn quantity(row: &SheetRow) -> Result<u32, RowParseError> {
    let value = cell(row, columns::QUANTITY).ok_or(RowParseError::MissingField {
        row: row.row_number(),
        field: "quantity",
    })?;

    let invalid = || RowParseError::InvalidQuantity {
        row: row.row_number(),
        value: value.as_text().unwrap_or_default(),
    };

    let number = match value {
        CellValue::Number(n) => *n,
        CellValue::Text(s) => {
            let s = s.trim();
            match s.parse::<u32>() {
                Ok(q) => return Ok(q),
                Err(_) => s.parse::<f64>().map_err(|_| invalid())?,
            }
        }
        _ => return Err(invalid()),
    };

    if number.is_finite() && number.fract() == 0.0 && number >= 0.0 && number <= u32::MAX as f64 {
        Ok(number as u32)
    } else {
        Err(invalid())
    }
}
