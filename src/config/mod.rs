//! Configuration loading and management
//!
//! A [`MarketConfig`] declares every management table (which fields are
//! searched, which can be filtered, which can be sorted and how) together
//! with pagination bounds, logging and server settings.

use crate::core::error::ConfigError;
use crate::core::sort::SortState;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// How a sortable field is compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKind {
    /// Case-insensitive text ordering
    #[default]
    Text,
    /// Numeric ordering (integers and floats mix)
    Number,
    /// Chronological ordering of dates and date-times
    Date,
}

/// A field a table can be sorted by
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortField {
    /// Field name or dotted path
    pub field: String,

    /// Comparison used for this field
    #[serde(default)]
    pub kind: SortKind,
}

impl SortField {
    pub fn new(field: impl Into<String>, kind: SortKind) -> Self {
        Self {
            field: field.into(),
            kind,
        }
    }

    pub fn text(field: impl Into<String>) -> Self {
        Self::new(field, SortKind::Text)
    }

    pub fn number(field: impl Into<String>) -> Self {
        Self::new(field, SortKind::Number)
    }

    pub fn date(field: impl Into<String>) -> Self {
        Self::new(field, SortKind::Date)
    }
}

/// Configuration for one management table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Table name, also the REST path segment (e.g. "dealers")
    pub name: String,

    /// String fields matched by the free-text query (OR across fields)
    #[serde(default)]
    pub search_fields: Vec<String>,

    /// Fields accepted by equality and range filters
    #[serde(default)]
    pub filter_fields: Vec<String>,

    /// Fields accepted by the sort stage
    #[serde(default)]
    pub sort_fields: Vec<SortField>,

    /// Sort applied when the caller selects none (`field` or `field:desc`)
    #[serde(default)]
    pub default_sort: Option<String>,

    /// Page size override for this table
    #[serde(default)]
    pub page_size: Option<usize>,
}

impl TableConfig {
    /// Create a table with no searchable, filterable or sortable fields
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            search_fields: Vec::new(),
            filter_fields: Vec::new(),
            sort_fields: Vec::new(),
            default_sort: None,
            page_size: None,
        }
    }

    pub fn with_search_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_filter_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_sort_fields(mut self, fields: impl IntoIterator<Item = SortField>) -> Self {
        self.sort_fields = fields.into_iter().collect();
        self
    }

    pub fn with_default_sort(mut self, sort: impl Into<String>) -> Self {
        self.default_sort = Some(sort.into());
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Whether equality/range filters may target this field
    pub fn is_filterable(&self, field: &str) -> bool {
        self.filter_fields.iter().any(|f| f == field)
    }

    /// Comparison kind for a sortable field, `None` if the field is not sortable
    pub fn sort_kind(&self, field: &str) -> Option<SortKind> {
        self.sort_fields
            .iter()
            .find(|f| f.field == field)
            .map(|f| f.kind)
    }

    /// Parsed default sort, if one is configured and well-formed
    pub fn default_sort(&self) -> Option<SortState> {
        self.default_sort.as_deref().and_then(SortState::parse)
    }
}

/// Page size bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Page size used when neither the request nor the table sets one
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,

    /// Upper bound for any requested page size
    #[serde(default = "default_max_page_size")]
    pub max_page_size: usize,
}

fn default_page_size() -> usize {
    10
}

fn default_max_page_size() -> usize {
    100
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

impl PaginationConfig {
    /// Clamp a requested page size to `[1, max_page_size]`
    pub fn clamp_page_size(&self, requested: usize) -> usize {
        requested.clamp(1, self.max_page_size.max(1))
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Output format
    #[serde(default)]
    pub format: LogFormat,

    /// Filter directive used when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "partsmart=info,tower_http=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            filter: default_log_filter(),
        }
    }
}

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the server binds to
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Allow cross-origin requests from the portal front-ends
    #[serde(default = "default_allow_any_origin")]
    pub allow_any_origin: bool,
}

fn default_bind() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_allow_any_origin() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            allow_any_origin: default_allow_any_origin(),
        }
    }
}

/// Names taken by built-in routes (`/health`, `/healthz`, `/tables`)
pub const RESERVED_TABLE_NAMES: &[&str] = &["health", "healthz", "tables"];

/// Complete configuration for the marketplace list views
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketConfig {
    /// Page size bounds
    #[serde(default)]
    pub pagination: PaginationConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Management tables
    #[serde(default)]
    pub tables: Vec<TableConfig>,
}

impl MarketConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    ///
    /// The parsed configuration is validated before it is returned.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Find a table by name
    pub fn table(&self, name: &str) -> Option<&TableConfig> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// Page size a table starts with
    pub fn page_size_for(&self, table: &TableConfig) -> usize {
        self.pagination
            .clamp_page_size(table.page_size.unwrap_or(self.pagination.default_page_size))
    }

    /// Check structural invariants
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.pagination.max_page_size == 0 {
            return Err(ConfigError::InvalidPagination {
                message: "max_page_size must be at least 1".to_string(),
            });
        }
        if self.pagination.default_page_size == 0
            || self.pagination.default_page_size > self.pagination.max_page_size
        {
            return Err(ConfigError::InvalidPagination {
                message: format!(
                    "default_page_size must be within 1..={}",
                    self.pagination.max_page_size
                ),
            });
        }

        let mut seen = HashSet::new();
        for table in &self.tables {
            if table.name.trim().is_empty() {
                return Err(ConfigError::EmptyTableName);
            }
            if RESERVED_TABLE_NAMES.contains(&table.name.as_str()) {
                return Err(ConfigError::ReservedTableName {
                    table: table.name.clone(),
                });
            }
            if !seen.insert(table.name.as_str()) {
                return Err(ConfigError::DuplicateTable {
                    table: table.name.clone(),
                });
            }
            if let Some(sort) = &table.default_sort {
                let field = SortState::parse(sort).map(|s| s.field);
                let sortable = field
                    .as_deref()
                    .is_some_and(|f| table.sort_kind(f).is_some());
                if !sortable {
                    return Err(ConfigError::UnknownDefaultSort {
                        table: table.name.clone(),
                        field: sort.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Merge several configurations
    ///
    /// Tables are merged by name: a later table with the same name replaces
    /// the earlier one in place. Pagination, logging and server settings come
    /// from the last configuration.
    pub fn merge(configs: Vec<MarketConfig>) -> Self {
        let mut merged = MarketConfig {
            pagination: PaginationConfig::default(),
            logging: LoggingConfig::default(),
            server: ServerConfig::default(),
            tables: Vec::new(),
        };

        for config in configs {
            merged.pagination = config.pagination;
            merged.logging = config.logging;
            merged.server = config.server;

            for table in config.tables {
                match merged.tables.iter_mut().find(|t| t.name == table.name) {
                    Some(existing) => *existing = table,
                    None => merged.tables.push(table),
                }
            }
        }

        merged
    }

    /// The six back-office tables of the marketplace
    pub fn default_config() -> Self {
        Self {
            pagination: PaginationConfig::default(),
            logging: LoggingConfig::default(),
            server: ServerConfig::default(),
            tables: vec![
                TableConfig::new("dealers")
                    .with_search_fields(["name", "id", "email", "location"])
                    .with_filter_fields(["status", "region", "tier", "rating"])
                    .with_sort_fields([
                        SortField::text("name"),
                        SortField::text("id"),
                        SortField::number("rating"),
                        SortField::number("products"),
                        SortField::date("joined"),
                    ])
                    .with_default_sort("name"),
                TableConfig::new("products")
                    .with_search_fields(["name", "sku", "id", "brand"])
                    .with_filter_fields([
                        "category",
                        "status",
                        "brand",
                        "dealer_id",
                        "price",
                        "stock",
                    ])
                    .with_sort_fields([
                        SortField::text("name"),
                        SortField::text("sku"),
                        SortField::number("price"),
                        SortField::number("stock"),
                        SortField::date("created_at"),
                    ])
                    .with_page_size(12),
                TableConfig::new("orders")
                    .with_search_fields(["id", "customer", "email"])
                    .with_filter_fields(["status", "payment_status", "dealer_id", "total", "date"])
                    .with_sort_fields([
                        SortField::text("id"),
                        SortField::text("customer"),
                        SortField::number("total"),
                        SortField::date("date"),
                    ])
                    .with_default_sort("date:desc"),
                TableConfig::new("tickets")
                    .with_search_fields(["id", "subject", "customer"])
                    .with_filter_fields(["status", "priority", "category"])
                    .with_sort_fields([
                        SortField::text("id"),
                        SortField::text("subject"),
                        SortField::text("priority"),
                        SortField::date("created_at"),
                    ])
                    .with_default_sort("created_at:desc"),
                TableConfig::new("users")
                    .with_search_fields(["name", "email", "id"])
                    .with_filter_fields(["role", "status"])
                    .with_sort_fields([
                        SortField::text("name"),
                        SortField::text("email"),
                        SortField::number("orders"),
                        SortField::date("joined"),
                    ]),
                TableConfig::new("inventory")
                    .with_search_fields(["sku", "name", "id"])
                    .with_filter_fields(["category", "warehouse", "status", "quantity"])
                    .with_sort_fields([
                        SortField::text("name"),
                        SortField::text("sku"),
                        SortField::number("quantity"),
                        SortField::number("price"),
                        SortField::date("updated_at"),
                    ])
                    .with_default_sort("sku"),
            ],
        }
    }
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self::default_config()
    }
}
