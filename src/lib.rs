//! # partsmart
//!
//! List views for the back-office tables of an auto-parts marketplace:
//! dealers, products, orders, support tickets, users and inventory.
//!
//! ## Features
//!
//! - **Pure pipeline**: filter, sort and paginate as one function over an immutable collection
//! - **Declarative tables**: search, filter and sort fields configured per table in YAML
//! - **Forgiving inputs**: unknown fields, `"all"` selections and bad sort expressions are no-ops
//! - **Stable sorting**: descending order reverses the comparator, ties keep their order
//! - **Clamped paging**: a stale page number never lands on an empty page
//! - **REST exposure**: `GET /{table}?q=&filter=&sort=&page=&limit=` over the loaded catalog
//!
//! ## Quick Start
//!
//! ```rust
//! use partsmart::prelude::*;
//!
//! let config = MarketConfig::default_config();
//! let dealers = config.table("dealers").unwrap();
//!
//! let records = vec![
//!     Record::new().with("id", "DLR-1").with("name", "Torque Depot").with("status", "Active"),
//!     Record::new().with("id", "DLR-2").with("name", "Brake Barn").with("status", "Suspended"),
//! ];
//!
//! let mut state = ListState::new(dealers, config.page_size_for(dealers));
//! state.select("status", "Active");
//!
//! let view = state.view(&records, dealers);
//! assert_eq!(view.pagination.total, 1);
//! assert_eq!(view.data[0].id().as_deref(), Some("DLR-1"));
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;
pub mod telemetry;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Pipeline ===
    pub use crate::core::{
        Condition, FieldValue, FilterOp, FilterState, ListQuery, ListState, ListView, PageState,
        PaginatedResponse, PaginationMeta, QueryParams, Record, SortDirection, SortState,
        derive_view, filter, paginate, sort,
    };

    // === Errors ===
    pub use crate::core::{ConfigError, LoadError, MarketError, TableError};

    // === Storage ===
    pub use crate::core::RecordSource;
    pub use crate::storage::{Catalog, InMemoryRecordSource, JsonFileSource, Table};

    // === Config ===
    pub use crate::config::{
        LogFormat, LoggingConfig, MarketConfig, PaginationConfig, ServerConfig, SortField,
        SortKind, TableConfig,
    };

    // === Server ===
    pub use crate::server::{RestExposure, ServerBuilder, ServerHost};
    pub use crate::telemetry::init_logging;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};
}
