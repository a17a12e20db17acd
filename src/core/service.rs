//! Record source trait for loading collections

use crate::core::error::LoadError;
use crate::core::record::Record;
use async_trait::async_trait;

/// Source of the record collection behind each table
///
/// Implementations are queried once per table at startup. The framework
/// is agnostic to where the records come from.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Load every record of a table, in source order
    async fn load(&self, table: &str) -> Result<Vec<Record>, LoadError>;
}
