//! Raw tabular rows as delivered by an order source.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Integral cells at or beyond this magnitude are not representable as `i64`.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// A single raw cell value.
///
/// Deserializes from any JSON scalar; `null` becomes [`CellValue::Empty`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Empty,
}

impl CellValue {
    /// Render the cell as display text. `None` for empty cells.
    ///
    /// Integral numbers render without a fractional part, so a booth number
    /// typed as `245` comes back as `"245"` rather than `"245.0"`.
    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Text(s) => Some(s.clone()),
            CellValue::Number(n) if n.fract() == 0.0 && n.abs() < I64_LIMIT => {
                Some(format!("{}", *n as i64))
            }
            CellValue::Number(n) => Some(n.to_string()),
            CellValue::Bool(b) => Some(if *b { "TRUE" } else { "FALSE" }.to_string()),
            CellValue::Empty => None,
        }
    }

    /// True for empty cells and whitespace-only text.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Text(s) => s.trim().is_empty(),
            CellValue::Empty => true,
            _ => false,
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

/// Normalize a column header for lookup.
///
/// Trims, lower-cases and folds runs of spaces, hyphens and underscores into
/// a single `_`, so `"Booth Number"` and `"booth_number"` address the same column.
pub fn normalize_header(header: &str) -> String {
    let mut out = String::with_capacity(header.len());
    let mut pending_sep = false;
    for ch in header.trim().chars() {
        if ch.is_whitespace() || ch == '-' || ch == '_' {
            pending_sep = true;
            continue;
        }
        if pending_sep && !out.is_empty() {
            out.push('_');
        }
        pending_sep = false;
        out.extend(ch.to_lowercase());
    }
    out
}

/// One data row of a tabular result, keyed by normalized column header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetRow {
    /// 1-based row number in the source sheet (the header is row 1).
    row_number: usize,
    cells: HashMap<String, CellValue>,
}

impl SheetRow {
    pub fn new(row_number: usize) -> Self {
        Self {
            row_number,
            cells: HashMap::new(),
        }
    }

    /// Build a row from header/value pairs.
    pub fn from_pairs<I, K, V>(row_number: usize, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<CellValue>,
    {
        let mut row = Self::new(row_number);
        for (header, value) in pairs {
            row.insert(header.as_ref(), value.into());
        }
        row
    }

    /// Builder-style insert.
    pub fn with_cell(mut self, header: &str, value: impl Into<CellValue>) -> Self {
        self.insert(header, value.into());
        self
    }

    /// Insert a cell, replacing any previous value under the same header.
    /// Cells with an empty header are ignored.
    pub fn insert(&mut self, header: &str, value: CellValue) {
        let key = normalize_header(header);
        if !key.is_empty() {
            self.cells.insert(key, value);
        }
    }

    /// Look up a cell by header (any spelling accepted by [`normalize_header`]).
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(&normalize_header(column))
    }

    pub fn row_number(&self) -> usize {
        self.row_number
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// True when every cell is blank.
    pub fn is_blank(&self) -> bool {
        self.cells.values().all(CellValue::is_blank)
    }
}
