//! Comparator sort stage
//!
//! Rows are ordered by one field with a direction. The sort is always a
//! stable sort driven by a single comparator; descending order reverses the
//! comparator instead of reversing the output, so rows with equal keys keep
//! their prior relative order in both directions. Rows whose key is missing
//! or null sort last regardless of direction.

use crate::config::{SortKind, TableConfig};
use crate::core::field::compare_text;
use crate::core::record::Record;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first
    #[default]
    Asc,
    /// Largest first
    Desc,
}

impl SortDirection {
    /// Apply this direction to an ascending ordering
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    /// The opposite direction
    pub fn toggle(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Selected sort field and direction
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortState {
    pub field: String,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Desc)
    }

    /// Parse a sort expression
    ///
    /// # Format
    /// - `field` or `field:asc` (ascending)
    /// - `field:desc` (descending)
    ///
    /// Returns `None` for an empty field or an unknown direction.
    pub fn parse(expr: &str) -> Option<Self> {
        let (field, direction) = match expr.trim().split_once(':') {
            Some((field, dir)) => {
                let direction = match dir.trim().to_ascii_lowercase().as_str() {
                    "asc" => SortDirection::Asc,
                    "desc" => SortDirection::Desc,
                    _ => return None,
                };
                (field.trim(), direction)
            }
            None => (expr.trim(), SortDirection::Asc),
        };

        if field.is_empty() {
            return None;
        }
        Some(Self::new(field, direction))
    }
}

impl fmt::Display for SortState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.field, self.direction)
    }
}

/// Sort key extracted once per row
enum SortKey<'a> {
    Text(Cow<'a, str>),
    Number(f64),
    Instant(i64),
}

impl SortKey<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Text(a), SortKey::Text(b)) => compare_text(a, b),
            (SortKey::Number(a), SortKey::Number(b)) => a.total_cmp(b),
            (SortKey::Instant(a), SortKey::Instant(b)) => a.cmp(b),
            // One kind per field, so mixed keys never meet
            _ => Ordering::Equal,
        }
    }
}

fn extract_key<'a>(record: &'a Record, field: &str, kind: SortKind) -> Option<SortKey<'a>> {
    let value = record.get(field)?;
    match kind {
        SortKind::Text => value.display_text().map(SortKey::Text),
        SortKind::Number => value.as_f64().map(SortKey::Number),
        SortKind::Date => value.as_timestamp().map(SortKey::Instant),
    }
}

/// Compare two keys, placing missing keys last in either direction
fn compare_keys(
    a: &Option<SortKey<'_>>,
    b: &Option<SortKey<'_>>,
    direction: SortDirection,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => direction.apply(a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sort rows in place
///
/// Fields the table does not declare as sortable leave the rows untouched.
pub fn sort(rows: &mut Vec<&Record>, state: &SortState, table: &TableConfig) {
    let Some(kind) = table.sort_kind(&state.field) else {
        tracing::debug!(
            table = %table.name,
            field = %state.field,
            "ignoring sort on non-sortable field"
        );
        return;
    };

    // Decorate-sort-undecorate so each key is extracted once
    let mut keyed: Vec<(Option<SortKey<'_>>, &Record)> = rows
        .iter()
        .map(|&record| (extract_key(record, &state.field, kind), record))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| compare_keys(a, b, state.direction));

    rows.clear();
    rows.extend(keyed.into_iter().map(|(_, record)| record));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SortField;

    fn table() -> TableConfig {
        TableConfig::new("parts").with_sort_fields([
            SortField::text("name"),
            SortField::number("price"),
            SortField::date("listed"),
        ])
    }

    fn part(id: &str, name: &str, price: Option<f64>) -> Record {
        Record::new()
            .with("id", id)
            .with("name", name)
            .with("price", price)
    }

    fn ids(rows: &[&Record]) -> Vec<String> {
        rows.iter()
            .map(|r| r.id().map(|id| id.into_owned()).unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_parse_sort_expressions() {
        assert_eq!(SortState::parse("name"), Some(SortState::asc("name")));
        assert_eq!(SortState::parse("name:asc"), Some(SortState::asc("name")));
        assert_eq!(SortState::parse("price:DESC"), Some(SortState::desc("price")));
        assert_eq!(SortState::parse(" price : desc "), Some(SortState::desc("price")));
        assert_eq!(SortState::parse("price:sideways"), None);
        assert_eq!(SortState::parse(":desc"), None);
        assert_eq!(SortState::parse(""), None);
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        let state = SortState::desc("created_at");
        assert_eq!(state.to_string(), "created_at:desc");
        assert_eq!(SortState::parse(&state.to_string()), Some(state));
    }

    #[test]
    fn test_direction_toggle_and_apply() {
        assert_eq!(SortDirection::Asc.toggle(), SortDirection::Desc);
        assert_eq!(SortDirection::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(SortDirection::Asc.apply(Ordering::Less), Ordering::Less);
    }

    #[test]
    fn test_text_sort_is_case_insensitive() {
        let records = vec![
            part("1", "bosch", None),
            part("2", "Apex", None),
            part("3", "Castrol", None),
        ];
        let mut rows: Vec<&Record> = records.iter().collect();

        sort(&mut rows, &SortState::asc("name"), &table());
        assert_eq!(ids(&rows), vec!["2", "1", "3"]);
    }

    #[test]
    fn test_number_sort_descending() {
        let records = vec![
            part("1", "a", Some(10.0)),
            part("2", "b", Some(99.5)),
            part("3", "c", Some(42.0)),
        ];
        let mut rows: Vec<&Record> = records.iter().collect();

        sort(&mut rows, &SortState::desc("price"), &table());
        assert_eq!(ids(&rows), vec!["2", "3", "1"]);
    }

    #[test]
    fn test_descending_keeps_ties_in_original_order() {
        let records = vec![
            part("1", "a", Some(5.0)),
            part("2", "b", Some(9.0)),
            part("3", "c", Some(5.0)),
            part("4", "d", Some(9.0)),
        ];
        let mut rows: Vec<&Record> = records.iter().collect();

        sort(&mut rows, &SortState::desc("price"), &table());
        assert_eq!(ids(&rows), vec!["2", "4", "1", "3"]);

        let mut rows: Vec<&Record> = records.iter().collect();
        sort(&mut rows, &SortState::asc("price"), &table());
        assert_eq!(ids(&rows), vec!["1", "3", "2", "4"]);
    }

    #[test]
    fn test_missing_values_sort_last_both_ways() {
        let records = vec![
            part("1", "a", None),
            part("2", "b", Some(3.0)),
            part("3", "c", Some(1.0)),
        ];

        let mut rows: Vec<&Record> = records.iter().collect();
        sort(&mut rows, &SortState::asc("price"), &table());
        assert_eq!(ids(&rows), vec!["3", "2", "1"]);

        let mut rows: Vec<&Record> = records.iter().collect();
        sort(&mut rows, &SortState::desc("price"), &table());
        assert_eq!(ids(&rows), vec!["2", "3", "1"]);
    }

    #[test]
    fn test_date_sort() {
        let records = vec![
            Record::new().with("id", "1").with("listed", "2024-05-01"),
            Record::new().with("id", "2").with("listed", "2023-12-24"),
            Record::new().with("id", "3").with("listed", "2024-01-15"),
        ];
        // Builder strings stay strings; re-read through serde to get dates
        let records: Vec<Record> = records
            .into_iter()
            .map(|r| serde_json::from_value(serde_json::to_value(r).unwrap()).unwrap())
            .collect();
        let mut rows: Vec<&Record> = records.iter().collect();

        sort(&mut rows, &SortState::asc("listed"), &table());
        assert_eq!(ids(&rows), vec!["2", "3", "1"]);
    }

    #[test]
    fn test_non_sortable_field_is_noop() {
        let records = vec![part("2", "b", None), part("1", "a", None)];
        let mut rows: Vec<&Record> = records.iter().collect();

        sort(&mut rows, &SortState::asc("id"), &table());
        assert_eq!(ids(&rows), vec!["2", "1"]);
    }

    #[test]
    fn test_compare_keys_reverses_only_present_keys() {
        let a = part("1", "a", Some(1.0));
        let b = part("2", "b", Some(2.0));
        let missing = part("3", "c", None);

        fn key(record: &Record) -> Option<SortKey<'_>> {
            extract_key(record, "price", SortKind::Number)
        }

        assert_eq!(compare_keys(&key(&a), &key(&b), SortDirection::Asc), Ordering::Less);
        assert_eq!(compare_keys(&key(&a), &key(&b), SortDirection::Desc), Ordering::Greater);
        assert_eq!(
            compare_keys(&key(&a), &key(&missing), SortDirection::Desc),
            Ordering::Less
        );
    }
}
