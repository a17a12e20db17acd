//! Records: one row of marketplace data flowing through a list view

use crate::core::field::FieldValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Name of the field that identifies a record within its collection
pub const ID_FIELD: &str = "id";

/// An ordered mapping from field name to value
///
/// Records are opaque to the pipeline: foreign references such as a
/// product's `dealer_id` are carried as plain fields and never dereferenced.
///
/// # Example
/// ```rust
/// use partsmart::core::Record;
///
/// let dealer = Record::new()
///     .with("id", "DLR-001")
///     .with("name", "Apex Auto Parts")
///     .with("rating", 4.5);
///
/// assert_eq!(dealer.id().as_deref(), Some("DLR-001"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, FieldValue>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style field insertion
    pub fn with(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Insert or replace a field, returning the previous value
    pub fn insert(
        &mut self,
        field: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Option<FieldValue> {
        self.fields.insert(field.into(), value.into())
    }

    /// The record's identifier as text
    ///
    /// Numeric ids are accepted and rendered as their decimal text.
    pub fn id(&self) -> Option<Cow<'_, str>> {
        self.fields.get(ID_FIELD).and_then(FieldValue::display_text)
    }

    /// Look up a field by name or dotted path (`address.city`)
    ///
    /// A top-level key containing a dot wins over path traversal.
    pub fn get(&self, path: &str) -> Option<&FieldValue> {
        if let Some(value) = self.fields.get(path) {
            return Some(value);
        }

        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut current = self.fields.get(first)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// Iterate over top-level fields in insertion order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<IndexMap<String, FieldValue>> for Record {
    fn from(fields: IndexMap<String, FieldValue>) -> Self {
        Self { fields }
    }
}

impl TryFrom<serde_json::Value> for Record {
    type Error = serde_json::Error;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        serde_json::from_value(value)
    }
}
