//! Predicate filter stage
//!
//! A [`FilterState`] holds the free-text query, the enum selections made in
//! dropdowns, and optional range conditions. Before evaluation the state is
//! resolved against a table into a list of active predicates; unset values
//! (`"all"` or empty) and fields the table does not declare are dropped at
//! that point, so they can never exclude a record.

use crate::config::TableConfig;
use crate::core::field::FieldValue;
use crate::core::record::Record;
use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use std::sync::OnceLock;

/// Sentinel selection meaning "no filter"
pub const ALL: &str = "all";

/// Whether a selection value leaves its filter unset
pub fn is_unset(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value.eq_ignore_ascii_case(ALL)
}

/// Comparison applied by a [`Condition`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterOp {
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl FilterOp {
    fn eval(self, ordering: Ordering) -> bool {
        match self {
            FilterOp::Ne => ordering != Ordering::Equal,
            FilterOp::Gt => ordering == Ordering::Greater,
            FilterOp::Gte => ordering != Ordering::Less,
            FilterOp::Lt => ordering == Ordering::Less,
            FilterOp::Lte => ordering != Ordering::Greater,
        }
    }

    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "!" => Some(FilterOp::Ne),
            ">" => Some(FilterOp::Gt),
            ">=" => Some(FilterOp::Gte),
            "<" => Some(FilterOp::Lt),
            "<=" => Some(FilterOp::Lte),
            _ => None,
        }
    }
}

/// A range or negation condition on one field
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub field: String,
    pub op: FilterOp,
    pub value: FieldValue,
}

impl Condition {
    pub fn new(field: impl Into<String>, op: FilterOp, value: impl Into<FieldValue>) -> Self {
        Self {
            field: field.into(),
            op,
            value: value.into(),
        }
    }
}

/// Active search and filter selections for a table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    /// Free-text query, matched case-insensitively against the search fields
    pub query: String,

    /// Enum selections (field -> selected value, `"all"` for none)
    pub selections: IndexMap<String, String>,

    /// Range and negation conditions
    pub conditions: Vec<Condition>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style free-text query
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Builder-style enum selection
    pub fn with_selection(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.selections.insert(field.into(), value.into());
        self
    }

    /// Builder-style condition
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// Whether no value in this state can exclude a record
    pub fn is_default(&self) -> bool {
        self.query.trim().is_empty()
            && self.selections.values().all(|v| is_unset(v))
            && self.conditions.is_empty()
    }

    /// Parse the JSON filter object accepted by list endpoints
    ///
    /// # Format
    /// - Exact match: `{"status": "Active"}`
    /// - Negation: `{"status!": "Suspended"}`
    /// - Comparison: `{"price>": 10, "price<=": 250, "date>=": "2024-01-01"}`
    ///
    /// Non-object input and malformed keys are ignored.
    pub fn from_json(filter: &Value) -> Self {
        let mut state = Self::default();
        let Some(obj) = filter.as_object() else {
            return state;
        };

        for (key, value) in obj {
            let Some((field, suffix)) = parse_filter_key(key) else {
                tracing::debug!(key = %key, "ignoring malformed filter key");
                continue;
            };

            match suffix.and_then(FilterOp::from_suffix) {
                Some(op) => match serde_json::from_value::<FieldValue>(value.clone()) {
                    Ok(value) if !value.is_null() => {
                        state.conditions.push(Condition::new(field, op, value));
                    }
                    _ => tracing::debug!(key = %key, "ignoring filter condition without a value"),
                },
                None => {
                    let selected = match value {
                        Value::String(s) => Some(s.clone()),
                        Value::Number(n) => Some(n.to_string()),
                        Value::Bool(b) => Some(b.to_string()),
                        _ => None,
                    };
                    if let Some(selected) = selected {
                        state.selections.insert(field.to_string(), selected);
                    }
                }
            }
        }

        state
    }

    /// Resolve this state against a table into the predicates that can
    /// actually exclude records
    pub fn predicates<'a>(&'a self, table: &'a TableConfig) -> Vec<Predicate<'a>> {
        let mut predicates = Vec::new();

        let needle = self.query.trim();
        if !needle.is_empty() && !table.search_fields.is_empty() {
            predicates.push(Predicate::Text {
                needle: needle.to_lowercase(),
                fields: &table.search_fields,
            });
        }

        for (field, value) in &self.selections {
            if is_unset(value) {
                continue;
            }
            if !table.is_filterable(field) {
                tracing::debug!(
                    table = %table.name,
                    field = %field,
                    "ignoring filter on undeclared field"
                );
                continue;
            }
            predicates.push(Predicate::Equals { field, value });
        }

        for condition in &self.conditions {
            if !table.is_filterable(&condition.field) {
                tracing::debug!(
                    table = %table.name,
                    field = %condition.field,
                    "ignoring condition on undeclared field"
                );
                continue;
            }
            predicates.push(Predicate::Compare(condition));
        }

        predicates
    }

    /// Whether a record passes every active predicate
    pub fn matches(&self, record: &Record, table: &TableConfig) -> bool {
        self.predicates(table).iter().all(|p| p.matches(record))
    }
}

/// One active predicate, resolved against a table
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate<'a> {
    /// Lowercased needle contained in any of the fields
    Text {
        needle: String,
        fields: &'a [String],
    },
    /// Field display text equals the value exactly
    Equals { field: &'a str, value: &'a str },
    /// Range or negation condition
    Compare(&'a Condition),
}

impl Predicate<'_> {
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Predicate::Text { needle, fields } => fields.iter().any(|field| {
                record
                    .get(field)
                    .and_then(FieldValue::display_text)
                    .is_some_and(|text| text.to_lowercase().contains(needle.as_str()))
            }),
            Predicate::Equals { field, value } => record
                .get(field)
                .is_some_and(|v| selection_matches(v, value)),
            Predicate::Compare(condition) => record
                .get(&condition.field)
                .and_then(|v| v.compare(&condition.value))
                .is_some_and(|ordering| condition.op.eval(ordering)),
        }
    }
}

/// Exact equality between a stored value and a selected value
///
/// Numbers match by value so `45.0`, `45` and `"45"` all select a stored 45.
fn selection_matches(value: &FieldValue, selected: &str) -> bool {
    if value.display_text().is_some_and(|text| text == selected) {
        return true;
    }
    match (value.as_f64(), selected.trim().parse::<f64>()) {
        (Some(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Split a filter key into field and operator suffix
fn parse_filter_key(key: &str) -> Option<(&str, Option<&str>)> {
    static KEY_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = KEY_REGEX.get_or_init(|| {
        Regex::new(
            r"^(?P<field>[A-Za-z_][A-Za-z0-9_]*(?:\.[A-Za-z_][A-Za-z0-9_]*)*)(?P<op>>=|<=|>|<|!)?$",
        )
        .unwrap()
    });

    let captures = regex.captures(key.trim())?;
    let field = captures.name("field")?.as_str();
    let op = captures.name("op").map(|m| m.as_str());
    Some((field, op))
}

/// Keep the records that pass every active predicate, preserving order
pub fn filter<'a>(
    records: &'a [Record],
    state: &FilterState,
    table: &TableConfig,
) -> Vec<&'a Record> {
    let predicates = state.predicates(table);
    if predicates.is_empty() {
        return records.iter().collect();
    }

    records
        .iter()
        .filter(|record| predicates.iter().all(|p| p.matches(record)))
        .collect()
}
