//! Google Sheets API v4 client.
//!
//! Reads a region with `spreadsheets.values.get`. Authenticates with either an
//! API key (publicly shared sheets) or a pre-issued OAuth bearer token.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use super::{CellValue, SheetRow, SourceError, TabularSource};
use crate::config::SheetsConfig;
use crate::metrics;

/// Google Sheets API client.
pub struct GoogleSheetsClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    access_token: Option<String>,
    timeout: Duration,
}

/// `spreadsheets.values.get` response body.
#[derive(Debug, Deserialize)]
struct ValueRange {
    /// Absent when the region holds no values at all.
    #[serde(default)]
    values: Vec<Vec<CellValue>>,
}

impl GoogleSheetsClient {
    /// Create a new Google Sheets client.
    pub fn new(config: &SheetsConfig) -> Result<Self, SourceError> {
        if !config.has_credentials() {
            return Err(SourceError::NotConfigured(
                "Google Sheets api_key or access_token is required".to_string(),
            ));
        }

        let timeout = Duration::from_secs(u64::from(config.timeout_secs));
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone().filter(|k| !k.is_empty()),
            access_token: config.access_token.clone().filter(|t| !t.is_empty()),
            timeout,
        })
    }

    fn map_transport_error(&self, e: reqwest::Error) -> SourceError {
        if e.is_timeout() {
            SourceError::Timeout(self.timeout)
        } else {
            SourceError::HttpError(e)
        }
    }

    async fn fetch_values(
        &self,
        spreadsheet_id: &str,
        region: &str,
    ) -> Result<Vec<Vec<CellValue>>, SourceError> {
        let url = format!(
            "{}/spreadsheets/{}/values/{}",
            self.base_url,
            urlencoding::encode(spreadsheet_id),
            urlencoding::encode(region)
        );

        debug!("Google Sheets values.get: spreadsheet='{}', region='{}'", spreadsheet_id, region);

        let mut request = self.client.get(&url).query(&[
            ("valueRenderOption", "UNFORMATTED_VALUE"),
            ("majorDimension", "ROWS"),
        ]);

        if let Some(key) = &self.api_key {
            request = request.query(&[("key", key.as_str())]);
        }
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let status = response.status();
        if status == 401 || status == 403 {
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::Unauthorized(body));
        }
        if status == 404 {
            return Err(SourceError::NotFound(format!(
                "spreadsheet '{}' region '{}'",
                spreadsheet_id, region
            )));
        }
        if status == 429 {
            return Err(SourceError::RateLimitExceeded);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SourceError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let range: ValueRange = serde_json::from_str(&body).map_err(|e| {
            SourceError::ParseError(format!("Failed to parse values response: {}", e))
        })?;

        Ok(range.values)
    }
}

#[async_trait]
impl TabularSource for GoogleSheetsClient {
    async fn fetch(&self, source_id: &str, region: &str) -> Result<Vec<SheetRow>, SourceError> {
        let start = Instant::now();
        let result = self.fetch_values(source_id, region).await;

        let outcome = if result.is_ok() { "success" } else { "error" };
        metrics::SOURCE_REQUESTS
            .with_label_values(&[self.name(), outcome])
            .inc();
        metrics::SOURCE_DURATION
            .with_label_values(&[self.name()])
            .observe(start.elapsed().as_secs_f64());

        let rows = rows_from_values(result?);
        debug!("Google Sheets returned {} data rows", rows.len());
        Ok(rows)
    }

    fn name(&self) -> &'static str {
        "google_sheets"
    }
}

/// Zip data rows against the header row.
///
/// Short rows are padded with empty cells, cells past the last header are
/// dropped, and fully blank rows are skipped. When a header repeats, the
/// first non-blank cell under it wins. Row numbers are 1-based sheet rows, so
/// the first data row is row 2.
pub(crate) fn rows_from_values(values: Vec<Vec<CellValue>>) -> Vec<SheetRow> {
    let mut iter = values.into_iter();
    let Some(header) = iter.next() else {
        return Vec::new();
    };

    let headers: Vec<String> = header
        .iter()
        .map(|h| h.as_text().unwrap_or_default())
        .collect();

    iter.enumerate()
        .map(|(idx, cells)| {
            let mut row = SheetRow::new(idx + 2);
            let mut cells = cells.into_iter();
            for name in &headers {
                let cell = cells.next().unwrap_or(CellValue::Empty);
                if row.get(name).is_some_and(|existing| !existing.is_blank()) {
                    continue;
                }
                row.insert(name, cell);
            }
            row
        })
        .filter(|row| !row.is_blank())
        .collect()
}
