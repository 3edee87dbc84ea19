//! Order ingestion, normalization and aggregation for trade-show booth logistics.

pub mod aggregate;
pub mod config;
pub mod ingest;
pub mod metrics;
pub mod order;
pub mod source;
pub mod testing;

pub use aggregate::{
    booth_orders, exhibitor_orders, order_stats, orders_for_booth, orders_for_exhibitor,
    summarize_exhibitors, BoothOrders, ExhibitorOrders,
};
pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, CorsConfig,
    SanitizedConfig, ServerConfig, SheetsConfig,
};
pub use ingest::{FallbackReason, LoadedOrders, OrderOrigin, OrderPipeline, ORDERS_REGION};
pub use order::{
    normalize_status, parse_order, parse_rows, synthetic_orders, ExhibitorSummary, Order,
    OrderStats, OrderStatus, ParsedOrders, RowParseError,
};
pub use source::{
    create_order_source, CellValue, GoogleSheetsClient, SheetRow, SourceError, TabularSource,
};
