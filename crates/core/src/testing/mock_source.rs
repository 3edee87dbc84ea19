//! Mock tabular source for testing.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::source::{SheetRow, SourceError, TabularSource};

/// Mock implementation of the TabularSource trait.
///
/// Provides controllable behavior for testing:
/// - Return configurable rows
/// - Track fetches for assertions
/// - Simulate failures and slow responses
#[derive(Debug, Clone, Default)]
pub struct MockTabularSource {
    /// Rows returned by every successful fetch.
    rows: Arc<RwLock<Vec<SheetRow>>>,
    /// Recorded (source_id, region) pairs.
    fetches: Arc<RwLock<Vec<(String, String)>>>,
    /// If set, the next fetch will fail with this error.
    next_error: Arc<RwLock<Option<SourceError>>>,
    /// If true, every fetch fails.
    failing: Arc<RwLock<bool>>,
    /// Artificial latency per fetch.
    delay: Arc<RwLock<Option<Duration>>>,
}

impl MockTabularSource {
    /// Create a new empty mock source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rows returned by fetches.
    pub async fn set_rows(&self, rows: Vec<SheetRow>) {
        *self.rows.write().await = rows;
    }

    /// Clear all rows.
    pub async fn clear_rows(&self) {
        self.rows.write().await.clear();
    }

    /// Fail the next fetch with the given error.
    pub async fn set_next_error(&self, error: SourceError) {
        *self.next_error.write().await = Some(error);
    }

    /// Make every fetch fail until reset.
    pub async fn set_failing(&self, failing: bool) {
        *self.failing.write().await = failing;
    }

    /// Delay each fetch by the given duration.
    pub async fn set_delay(&self, delay: Duration) {
        *self.delay.write().await = Some(delay);
    }

    /// All recorded fetches.
    pub async fn recorded_fetches(&self) -> Vec<(String, String)> {
        self.fetches.read().await.clone()
    }

    /// Number of fetches made so far.
    pub async fn fetch_count(&self) -> usize {
        self.fetches.read().await.len()
    }
}

#[async_trait]
impl TabularSource for MockTabularSource {
    async fn fetch(&self, source_id: &str, region: &str) -> Result<Vec<SheetRow>, SourceError> {
        self.fetches
            .write()
            .await
            .push((source_id.to_string(), region.to_string()));

        let delay = *self.delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(error) = self.next_error.write().await.take() {
            return Err(error);
        }
        if *self.failing.read().await {
            return Err(SourceError::ApiError {
                status: 503,
                message: "mock source unavailable".to_string(),
            });
        }

        Ok(self.rows.read().await.clone())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures;

    #[tokio::test]
    async fn test_returns_configured_rows() {
        let source = MockTabularSource::new();
        source
            .set_rows(vec![fixtures::order_row(2, "ORD-1", "Acme", "A-1", "Delivered", 1)])
            .await;

        let rows = source.fetch("sheet", "Orders").await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(source.fetch_count().await, 1);
    }

    #[tokio::test]
    async fn test_next_error_is_one_shot() {
        let source = MockTabularSource::new();
        source.set_next_error(SourceError::RateLimitExceeded).await;

        assert!(matches!(
            source.fetch("sheet", "Orders").await,
            Err(SourceError::RateLimitExceeded)
        ));
        assert!(source.fetch("sheet", "Orders").await.is_ok());
    }

    #[tokio::test]
    async fn test_failing_until_reset() {
        let source = MockTabularSource::new();
        source.set_failing(true).await;
        assert!(source.fetch("sheet", "Orders").await.is_err());
        assert!(source.fetch("sheet", "Orders").await.is_err());

        source.set_failing(false).await;
        assert!(source.fetch("sheet", "Orders").await.is_ok());
    }
}
