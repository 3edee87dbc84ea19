//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Ingestion runs and their origin (live or fallback)
//! - Rows rejected by the record parser
//! - External source requests

use once_cell::sync::Lazy;
use prometheus::{HistogramOpts, HistogramVec, IntCounter, IntCounterVec, Opts};

// =============================================================================
// Ingestion
// =============================================================================

/// Ingestion runs by origin.
pub static INGESTION_RUNS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "boothtrack_ingestion_runs_total",
            "Total order ingestion runs",
        ),
        &["origin"], // "live", "connector_unavailable", "fetch_failed", "empty_result"
    )
    .unwrap()
});

/// Orders returned per ingestion run.
pub static ORDERS_LOADED: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "boothtrack_orders_loaded",
            "Number of orders returned per ingestion run",
        )
        .buckets(vec![0.0, 1.0, 5.0, 10.0, 25.0, 50.0, 100.0, 250.0, 500.0, 1000.0]),
        &["origin"],
    )
    .unwrap()
});

/// Source rows skipped by the record parser.
pub static ROWS_SKIPPED: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "boothtrack_rows_skipped_total",
        "Total source rows skipped because they could not be parsed",
    )
    .unwrap()
});

// =============================================================================
// External source
// =============================================================================

/// External source request duration.
pub static SOURCE_DURATION: Lazy<HistogramVec> = Lazy::new(|| {
    HistogramVec::new(
        HistogramOpts::new(
            "boothtrack_source_request_duration_seconds",
            "Duration of requests to the external order source",
        )
        .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
        &["source"],
    )
    .unwrap()
});

/// External source requests by outcome.
pub static SOURCE_REQUESTS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "boothtrack_source_requests_total",
            "Total requests to the external order source",
        ),
        &["source", "result"], // result: "success", "error"
    )
    .unwrap()
});

// =============================================================================
// Helper functions
// =============================================================================

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        // Ingestion
        Box::new(INGESTION_RUNS.clone()),
        Box::new(ORDERS_LOADED.clone()),
        Box::new(ROWS_SKIPPED.clone()),
        // External source
        Box::new(SOURCE_DURATION.clone()),
        Box::new(SOURCE_REQUESTS.clone()),
    ]
}
