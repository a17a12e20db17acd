//! Server host for transport-agnostic API exposure
//!
//! The host holds the merged configuration and the loaded catalog. It is
//! built once every table has loaded and is shared read-only by every
//! request afterwards.

use crate::config::MarketConfig;
use crate::core::{ListQuery, ListView, MarketError, QueryParams, Record};
use crate::storage::Catalog;
use std::sync::Arc;

/// Host context containing the loaded tables and their configuration
pub struct ServerHost {
    /// Merged configuration
    pub config: Arc<MarketConfig>,

    /// Loaded tables
    pub catalog: Catalog,
}

impl ServerHost {
    pub fn new(config: MarketConfig, catalog: Catalog) -> Self {
        Self {
            config: Arc::new(config),
            catalog,
        }
    }

    /// Names of the loaded tables, in configuration order
    pub fn table_names(&self) -> Vec<&str> {
        self.catalog.tables().map(|t| t.name()).collect()
    }

    /// Translate request parameters into a list query for a table
    pub fn list_query(
        &self,
        table: &str,
        params: &QueryParams,
    ) -> Result<ListQuery, MarketError> {
        let table = self.catalog.get(table)?;
        Ok(params.to_list_query(table.config(), &self.config.pagination))
    }

    /// Derive one page of a table from request parameters
    pub fn list(&self, table: &str, params: &QueryParams) -> Result<ListView<'_>, MarketError> {
        let query = self.list_query(table, params)?;
        Ok(self.catalog.get(table)?.view(&query))
    }

    /// Fetch a single record
    pub fn get(&self, table: &str, id: &str) -> Result<&Record, MarketError> {
        Ok(self.catalog.record(table, id)?)
    }
}
