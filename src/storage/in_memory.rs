//! In-memory implementation of RecordSource for testing and development

use crate::core::{LoadError, Record, RecordSource};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// In-memory record source
///
/// Useful for testing, demos and fixtures compiled into a binary. Uses
/// RwLock for thread-safe access.
#[derive(Clone, Default)]
pub struct InMemoryRecordSource {
    tables: Arc<RwLock<HashMap<String, Vec<Record>>>>,
}

impl InMemoryRecordSource {
    /// Create an empty in-memory source
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style table registration
    pub fn with_table(self, table: impl Into<String>, records: Vec<Record>) -> Self {
        // A fresh source has no other handle, so the lock cannot be poisoned
        if let Ok(mut tables) = self.tables.write() {
            tables.insert(table.into(), records);
        }
        self
    }

    /// Insert or replace the records of a table
    pub fn insert_table(
        &self,
        table: impl Into<String>,
        records: Vec<Record>,
    ) -> Result<(), LoadError> {
        let table = table.into();
        let mut tables = self.tables.write().map_err(|e| LoadError::Unavailable {
            table: table.clone(),
            message: format!("Failed to acquire write lock: {}", e),
        })?;

        tables.insert(table, records);
        Ok(())
    }

    /// Names of the tables currently held
    pub fn table_names(&self) -> Vec<String> {
        self.tables
            .read()
            .map(|tables| tables.keys().cloned().collect())
            .unwrap_or_default()
    }
}

#[async_trait]
impl RecordSource for InMemoryRecordSource {
    async fn load(&self, table: &str) -> Result<Vec<Record>, LoadError> {
        let tables = self.tables.read().map_err(|e| LoadError::Unavailable {
            table: table.to_string(),
            message: format!("Failed to acquire read lock: {}", e),
        })?;

        tables.get(table).cloned().ok_or_else(|| LoadError::Missing {
            table: table.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dealer(id: &str) -> Record {
        Record::new().with("id", id).with("name", format!("Dealer {id}"))
    }

    #[tokio::test]
    async fn test_load_table() {
        let source =
            InMemoryRecordSource::new().with_table("dealers", vec![dealer("D1"), dealer("D2")]);

        let records = source.load("dealers").await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].id().as_deref(), Some("D2"));
    }

    #[tokio::test]
    async fn test_missing_table() {
        let source = InMemoryRecordSource::new();

        let err = source.load("orders").await.unwrap_err();
        assert!(matches!(err, LoadError::Missing { ref table } if table == "orders"));
    }

    #[tokio::test]
    async fn test_insert_table_replaces_records() {
        let source = InMemoryRecordSource::new().with_table("dealers", vec![dealer("D1")]);
        source
            .insert_table("dealers", vec![dealer("D7"), dealer("D8"), dealer("D9")])
            .unwrap();

        let records = source.load("dealers").await.unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(source.table_names(), vec!["dealers".to_string()]);
    }

    #[tokio::test]
    async fn test_clones_share_tables() {
        let source = InMemoryRecordSource::new();
        let clone = source.clone();
        clone.insert_table("users", vec![dealer("U1")]).unwrap();

        assert_eq!(source.load("users").await.unwrap().len(), 1);
    }
}
