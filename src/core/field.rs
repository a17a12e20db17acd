//! Field value types and comparison

use chrono::{DateTime, FixedOffset, NaiveDate, SecondsFormat, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::cmp::Ordering;

/// A polymorphic field value that can hold different types
///
/// Variant order matters for untagged deserialization: RFC 3339 strings
/// become `DateTime`, `YYYY-MM-DD` strings become `Date`, everything else
/// stays a `String`. Date-times keep their source offset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    DateTime(DateTime<FixedOffset>),
    Date(NaiveDate),
    String(String),
    List(Vec<FieldValue>),
    Object(IndexMap<String, FieldValue>),
}

impl FieldValue {
    /// Get the value as a string if possible
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as a float, widening integers
    ///
    /// NaN is reported as absent so callers always get a total order.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(i) => Some(*i as f64),
            FieldValue::Float(f) if !f.is_nan() => Some(*f),
            _ => None,
        }
    }

    /// Get the value as epoch milliseconds (dates are taken at midnight UTC)
    pub fn as_timestamp(&self) -> Option<i64> {
        match self {
            FieldValue::DateTime(dt) => Some(dt.timestamp_millis()),
            FieldValue::Date(d) => d
                .and_hms_opt(0, 0, 0)
                .map(|naive| naive.and_utc().timestamp_millis()),
            _ => None,
        }
    }

    /// Get a nested object if this value is one
    pub fn as_object(&self) -> Option<&IndexMap<String, FieldValue>> {
        match self {
            FieldValue::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Text used for free-text search and enum equality
    ///
    /// Only scalars have a display text; null, lists and objects return `None`.
    pub fn display_text(&self) -> Option<Cow<'_, str>> {
        match self {
            FieldValue::String(s) => Some(Cow::Borrowed(s)),
            FieldValue::Integer(i) => Some(Cow::Owned(i.to_string())),
            FieldValue::Float(f) => Some(Cow::Owned(f.to_string())),
            FieldValue::Boolean(b) => Some(Cow::Owned(b.to_string())),
            FieldValue::DateTime(dt) => {
                Some(Cow::Owned(dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)))
            }
            FieldValue::Date(d) => Some(Cow::Owned(d.to_string())),
            FieldValue::Null | FieldValue::List(_) | FieldValue::Object(_) => None,
        }
    }

    /// Compare two values of the same family
    ///
    /// Numbers compare numerically (integers and floats mix), dates and
    /// date-times chronologically, strings case-insensitively. Returns `None`
    /// when the values belong to different families.
    pub fn compare(&self, other: &FieldValue) -> Option<Ordering> {
        match (self, other) {
            (FieldValue::Integer(a), FieldValue::Integer(b)) => Some(a.cmp(b)),
            (FieldValue::String(a), FieldValue::String(b)) => Some(compare_text(a, b)),
            (FieldValue::Boolean(a), FieldValue::Boolean(b)) => Some(a.cmp(b)),
            _ => {
                if let (Some(a), Some(b)) = (self.as_f64(), other.as_f64()) {
                    return Some(a.total_cmp(&b));
                }
                if let (Some(a), Some(b)) = (self.as_timestamp(), other.as_timestamp()) {
                    return Some(a.cmp(&b));
                }
                None
            }
        }
    }
}

/// Case-insensitive text ordering, tie-broken by the raw strings
///
/// Approximates display-name collation while staying a total order.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Integer(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Integer(i64::from(i))
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Boolean(b)
    }
}

impl From<DateTime<FixedOffset>> for FieldValue {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        FieldValue::DateTime(dt)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(dt: DateTime<Utc>) -> Self {
        FieldValue::DateTime(dt.fixed_offset())
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(d: NaiveDate) -> Self {
        FieldValue::Date(d)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}
