//! Typed error handling for partsmart
//!
//! The list view pipeline itself never fails: unset or unknown filters and
//! sorts degrade to pass-through. Errors only appear at the edges, when
//! configuration is parsed, when collections are loaded, and when a caller
//! asks for a table or record that does not exist.
//!
//! # Error Categories
//!
//! - [`TableError`]: Unknown tables and missing records
//! - [`ConfigError`]: Invalid table or pagination configuration
//! - [`LoadError`]: Failures of the one-shot data load
//!
//! # Example
//!
//! ```rust,ignore
//! match catalog.get("dealers") {
//!     Ok(table) => println!("{} dealers", table.len()),
//!     Err(TableError::UnknownTable { table }) => eprintln!("no table {table}"),
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// The main error type for partsmart
#[derive(Debug, Error)]
pub enum MarketError {
    /// Table lookup errors
    #[error(transparent)]
    Table(#[from] TableError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Data loading errors
    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl MarketError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            MarketError::Table(e) => e.status_code(),
            MarketError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            MarketError::Load(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            MarketError::Table(e) => e.error_code(),
            MarketError::Config(_) => "CONFIG_ERROR",
            MarketError::Load(_) => "LOAD_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            MarketError::Table(TableError::UnknownTable { table }) => {
                Some(serde_json::json!({ "table": table }))
            }
            MarketError::Table(TableError::RecordNotFound { table, id }) => {
                Some(serde_json::json!({ "table": table, "id": id }))
            }
            MarketError::Load(LoadError::DuplicateId { table, id }) => {
                Some(serde_json::json!({ "table": table, "id": id }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for MarketError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), "{}", self);
        }
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Table Errors
// =============================================================================

/// Errors raised when resolving a table or a record inside it
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    /// No table with this name is configured
    #[error("Unknown table: {table}")]
    UnknownTable { table: String },

    /// The table exists but has no record with this id
    #[error("{table} record with id '{id}' not found")]
    RecordNotFound { table: String, id: String },
}

impl TableError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            TableError::UnknownTable { .. } => StatusCode::NOT_FOUND,
            TableError::RecordNotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            TableError::UnknownTable { .. } => "UNKNOWN_TABLE",
            TableError::RecordNotFound { .. } => "RECORD_NOT_FOUND",
        }
    }
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors detected while validating a [`MarketConfig`](crate::config::MarketConfig)
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A table was declared without a name
    #[error("Table name must not be empty")]
    EmptyTableName,

    /// Two tables share a name
    #[error("Table '{table}' is declared more than once")]
    DuplicateTable { table: String },

    /// A table name collides with a built-in route
    #[error("Table name '{table}' is reserved")]
    ReservedTableName { table: String },

    /// Pagination bounds are unusable
    #[error("Invalid pagination: {message}")]
    InvalidPagination { message: String },

    /// A default sort names a field the table cannot sort by
    #[error("Default sort '{field}' of table '{table}' is not a sortable field")]
    UnknownDefaultSort { table: String, field: String },
}

// =============================================================================
// Load Errors
// =============================================================================

/// Errors raised by the one-shot load of a collection
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source has no data for this table
    #[error("No data available for table '{table}'")]
    Missing { table: String },

    /// Reading the underlying data failed
    #[error("Failed to read data for table '{table}': {source}")]
    Io {
        table: String,
        #[source]
        source: std::io::Error,
    },

    /// The data could not be parsed into records
    #[error("Malformed data for table '{table}': {message}")]
    Malformed { table: String, message: String },

    /// A record carries no usable `id`
    #[error("Record #{index} of table '{table}' has no id")]
    MissingId { table: String, index: usize },

    /// Two records of the same collection share an id
    #[error("Duplicate id '{id}' in table '{table}'")]
    DuplicateId { table: String, id: String },

    /// The source could not be accessed
    #[error("Data source unavailable for table '{table}': {message}")]
    Unavailable { table: String, message: String },
}

impl LoadError {
    /// The table whose load failed
    pub fn table(&self) -> &str {
        match self {
            LoadError::Missing { table }
            | LoadError::Io { table, .. }
            | LoadError::Malformed { table, .. }
            | LoadError::MissingId { table, .. }
            | LoadError::DuplicateId { table, .. }
            | LoadError::Unavailable { table, .. } => table,
        }
    }
}
