//! JSON file implementation of RecordSource
//!
//! Each table lives in `<dir>/<table>.json` as an array of objects.

use crate::core::{LoadError, Record, RecordSource};
use async_trait::async_trait;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Record source reading one JSON file per table
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    dir: PathBuf,
}

impl JsonFileSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the table files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing a table
    pub fn path_for(&self, table: &str) -> PathBuf {
        self.dir.join(format!("{table}.json"))
    }
}

/// Parse a JSON array of objects into records
pub fn parse_records(table: &str, content: &str) -> Result<Vec<Record>, LoadError> {
    let malformed = |message: String| LoadError::Malformed {
        table: table.to_string(),
        message,
    };

    let value: Value = serde_json::from_str(content).map_err(|e| malformed(e.to_string()))?;
    let Value::Array(items) = value else {
        return Err(malformed("expected a JSON array of objects".to_string()));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            if !item.is_object() {
                return Err(malformed(format!("item #{index} is not an object")));
            }
            Record::try_from(item).map_err(|e| malformed(format!("item #{index}: {e}")))
        })
        .collect()
}

#[async_trait]
impl RecordSource for JsonFileSource {
    async fn load(&self, table: &str) -> Result<Vec<Record>, LoadError> {
        let path = self.path_for(table);
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| match source.kind() {
                ErrorKind::NotFound => LoadError::Missing {
                    table: table.to_string(),
                },
                _ => LoadError::Io {
                    table: table.to_string(),
                    source,
                },
            })?;

        let records = parse_records(table, &content)?;
        tracing::debug!(table, path = %path.display(), count = records.len(), "read table file");
        Ok(records)
    }
}
