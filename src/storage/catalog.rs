//! Loaded tables shared across requests
//!
//! Every configured table is loaded once, checked for unique ids and then
//! frozen as an `Arc<[Record]>`. Views borrow from the frozen collection,
//! so concurrent requests never take a lock.

use crate::config::{MarketConfig, TableConfig};
use crate::core::{ListQuery, ListView, LoadError, Record, RecordSource, TableError, derive_view};
use indexmap::IndexMap;
use std::collections::HashMap;
use std::sync::Arc;

/// One loaded table: configuration plus its immutable records
#[derive(Debug, Clone)]
pub struct Table {
    config: TableConfig,
    records: Arc<[Record]>,
    index: HashMap<String, usize>,
}

impl Table {
    /// Freeze a collection, rejecting records without an id or with duplicate ids
    pub fn new(config: TableConfig, records: Vec<Record>) -> Result<Self, LoadError> {
        let mut index = HashMap::with_capacity(records.len());

        for (position, record) in records.iter().enumerate() {
            let id = record.id().ok_or_else(|| LoadError::MissingId {
                table: config.name.clone(),
                index: position,
            })?;
            if index.insert(id.to_string(), position).is_some() {
                return Err(LoadError::DuplicateId {
                    table: config.name.clone(),
                    id: id.into_owned(),
                });
            }
        }

        Ok(Self {
            config,
            records: records.into(),
            index,
        })
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Find a record by id
    pub fn find(&self, id: &str) -> Option<&Record> {
        self.index.get(id).map(|&position| &self.records[position])
    }

    /// Derive a view over this table
    pub fn view(&self, query: &ListQuery) -> ListView<'_> {
        derive_view(&self.records, query, &self.config)
    }
}

/// All loaded tables, in configuration order
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tables: Arc<IndexMap<String, Table>>,
}

impl Catalog {
    /// Load every configured table from a source
    ///
    /// Loading stops at the first failing table.
    pub async fn load(
        config: &MarketConfig,
        source: &dyn RecordSource,
    ) -> Result<Self, LoadError> {
        let mut tables = IndexMap::with_capacity(config.tables.len());

        for table_config in &config.tables {
            let loaded = match source.load(&table_config.name).await {
                Ok(records) => Table::new(table_config.clone(), records),
                Err(e) => Err(e),
            };

            match loaded {
                Ok(table) => {
                    tracing::info!(table = %table.name(), count = table.len(), "loaded table");
                    tables.insert(table_config.name.clone(), table);
                }
                Err(e) => {
                    tracing::warn!(
                        table = %table_config.name,
                        error = %e,
                        "failed to load table"
                    );
                    return Err(e);
                }
            }
        }

        Ok(Self {
            tables: Arc::new(tables),
        })
    }

    /// Build a catalog from already loaded tables
    pub fn from_tables(tables: impl IntoIterator<Item = Table>) -> Self {
        let tables = tables
            .into_iter()
            .map(|table| (table.name().to_string(), table))
            .collect();
        Self {
            tables: Arc::new(tables),
        }
    }

    /// Look up a table by name
    pub fn get(&self, name: &str) -> Result<&Table, TableError> {
        self.tables.get(name).ok_or_else(|| TableError::UnknownTable {
            table: name.to_string(),
        })
    }

    /// Look up a record of a table by id
    pub fn record(&self, table: &str, id: &str) -> Result<&Record, TableError> {
        self.get(table)?
            .find(id)
            .ok_or_else(|| TableError::RecordNotFound {
                table: table.to_string(),
                id: id.to_string(),
            })
    }

    /// Iterate over tables in configuration order
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.tables.values()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
