//! Order ingestion with synthetic fallback.
//!
//! Every call runs the whole chain again: no source configured, fetch
//! failure, and an empty result all resolve to the synthetic dataset, so
//! callers always get a populated order list and never see a source error.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::config::SheetsConfig;
use crate::metrics;
use crate::order::{parse_rows, synthetic_orders, Order};
use crate::source::{create_order_source, SheetRow, SourceError, TabularSource};

/// Region read from the spreadsheet unless configured otherwise.
pub const ORDERS_REGION: &str = "Orders";

/// Why an ingestion run served the synthetic dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    /// No source was configured at startup.
    ConnectorUnavailable,
    /// The fetch failed (transport, auth, response parsing or timeout).
    FetchFailed,
    /// The source returned no usable rows.
    EmptyResult,
}

impl FallbackReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            FallbackReason::ConnectorUnavailable => "connector_unavailable",
            FallbackReason::FetchFailed => "fetch_failed",
            FallbackReason::EmptyResult => "empty_result",
        }
    }
}

/// Where the orders of an ingestion run came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "reason", rename_all = "snake_case")]
pub enum OrderOrigin {
    Live,
    Fallback(FallbackReason),
}

impl OrderOrigin {
    /// Metric/log label: `"live"` or the fallback reason.
    pub fn label(&self) -> &'static str {
        match self {
            OrderOrigin::Live => "live",
            OrderOrigin::Fallback(reason) => reason.as_str(),
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, OrderOrigin::Live)
    }
}

/// Result of one ingestion run.
#[derive(Debug, Clone)]
pub struct LoadedOrders {
    pub orders: Vec<Order>,
    pub origin: OrderOrigin,
    /// Source rows dropped by the record parser.
    pub skipped_rows: usize,
}

/// Loads the current order collection from the configured source.
pub struct OrderPipeline {
    source: Option<Arc<dyn TabularSource>>,
    spreadsheet_id: String,
    region: String,
    fetch_timeout: Option<Duration>,
}

impl OrderPipeline {
    /// Create a pipeline over an optional source.
    ///
    /// `None` means no connector could be built; every run then serves the
    /// synthetic dataset.
    pub fn new(source: Option<Arc<dyn TabularSource>>, spreadsheet_id: impl Into<String>) -> Self {
        Self {
            source,
            spreadsheet_id: spreadsheet_id.into(),
            region: ORDERS_REGION.to_string(),
            fetch_timeout: None,
        }
    }

    /// Pipeline without a source.
    pub fn synthetic_only() -> Self {
        Self::new(None, SheetsConfig::default().spreadsheet_id)
    }

    /// Build the pipeline from the `[sheets]` config section.
    ///
    /// A missing section or a connector that cannot be constructed (e.g. no
    /// credentials) yields a pipeline in permanent fallback mode.
    pub fn from_config(config: Option<&SheetsConfig>) -> Self {
        let Some(config) = config else {
            warn!("No [sheets] configuration, serving synthetic orders only");
            return Self::synthetic_only();
        };

        let source = match create_order_source(config) {
            Ok(source) => {
                info!(
                    "Order source '{}' configured for spreadsheet {}",
                    source.name(),
                    config.spreadsheet_id
                );
                Some(source)
            }
            Err(e) => {
                warn!("Order source unavailable ({}), serving synthetic orders only", e);
                None
            }
        };

        Self::new(source, config.spreadsheet_id.clone()).with_region(config.region.clone())
    }

    /// Read a different region than [`ORDERS_REGION`].
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Bound each fetch; expiry counts as a fetch failure.
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = Some(timeout);
        self
    }

    /// Whether a live source is configured.
    pub fn is_connected(&self) -> bool {
        self.source.is_some()
    }

    pub fn spreadsheet_id(&self) -> &str {
        &self.spreadsheet_id
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Load the current orders. Never fails.
    pub async fn load_orders(&self) -> Vec<Order> {
        self.load().await.orders
    }

    /// Load the current orders along with where they came from.
    pub async fn load(&self) -> LoadedOrders {
        let Some(source) = &self.source else {
            debug!("No order source configured, using synthetic orders");
            return Self::fallback(FallbackReason::ConnectorUnavailable, 0);
        };

        let rows = match self.fetch(source.as_ref()).await {
            Ok(rows) => rows,
            Err(e) => {
                error!("Error loading orders from {}: {}", source.name(), e);
                info!("Falling back to synthetic orders");
                return Self::fallback(FallbackReason::FetchFailed, 0);
            }
        };

        if rows.is_empty() {
            warn!("No rows found in region '{}', using synthetic orders", self.region);
            return Self::fallback(FallbackReason::EmptyResult, 0);
        }

        let parsed = parse_rows(&rows);
        let skipped_rows = parsed.skipped.len();
        if skipped_rows > 0 {
            metrics::ROWS_SKIPPED.inc_by(skipped_rows as u64);
            warn!("Skipped {} of {} malformed order rows", skipped_rows, rows.len());
        }

        if parsed.orders.is_empty() {
            warn!("No usable rows in region '{}', using synthetic orders", self.region);
            return Self::fallback(FallbackReason::EmptyResult, skipped_rows);
        }

        info!("Loaded {} orders from {}", parsed.orders.len(), source.name());
        Self::finish(parsed.orders, OrderOrigin::Live, skipped_rows)
    }

    async fn fetch(&self, source: &dyn TabularSource) -> Result<Vec<SheetRow>, SourceError> {
        let fetch = source.fetch(&self.spreadsheet_id, &self.region);
        match self.fetch_timeout {
            Some(limit) => tokio::time::timeout(limit, fetch)
                .await
                .map_err(|_| SourceError::Timeout(limit))?,
            None => fetch.await,
        }
    }

    fn fallback(reason: FallbackReason, skipped_rows: usize) -> LoadedOrders {
        Self::finish(synthetic_orders(), OrderOrigin::Fallback(reason), skipped_rows)
    }

    fn finish(orders: Vec<Order>, origin: OrderOrigin, skipped_rows: usize) -> LoadedOrders {
        metrics::INGESTION_RUNS
            .with_label_values(&[origin.label()])
            .inc();
        metrics::ORDERS_LOADED
            .with_label_values(&[origin.label()])
            .observe(orders.len() as f64);

        LoadedOrders {
            orders,
            origin,
            skipped_rows,
        }
    }
}
