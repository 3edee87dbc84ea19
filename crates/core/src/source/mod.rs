//! External tabular order sources.
//!
//! A source returns the raw rows of a named region of a spreadsheet-like
//! store. Sources know nothing about orders; turning rows into orders is the
//! job of [`crate::order::parse_rows`].

mod google_sheets;
mod types;

pub use google_sheets::GoogleSheetsClient;
pub use types::*;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::SheetsConfig;

/// Errors that can occur when fetching from a tabular source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Request did not complete in time.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Credentials rejected by the source.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Spreadsheet or region not found (404).
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Rate limit exceeded.
    #[error("Rate limit exceeded, please wait before retrying")]
    RateLimitExceeded,

    /// API returned an error.
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse response.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Source not configured (missing credentials, etc.).
    #[error("Source not configured: {0}")]
    NotConfigured(String),
}

/// A remote store of raw tabular rows.
///
/// Implementations must be safe to call concurrently; the ingestion pipeline
/// shares one instance across all requests.
#[async_trait]
pub trait TabularSource: Send + Sync {
    /// Fetch all data rows of `region` in the spreadsheet `source_id`,
    /// in source order. The header row is consumed, not returned.
    async fn fetch(&self, source_id: &str, region: &str) -> Result<Vec<SheetRow>, SourceError>;

    /// Name of this source backend
    fn name(&self) -> &'static str;
}

/// Factory function to create the order source from config.
///
/// Fails with [`SourceError::NotConfigured`] when no credentials are present,
/// which callers treat as running without a live source.
pub fn create_order_source(config: &SheetsConfig) -> Result<Arc<dyn TabularSource>, SourceError> {
    Ok(Arc::new(GoogleSheetsClient::new(config)?))
}
