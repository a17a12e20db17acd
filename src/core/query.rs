//! Query parameters for list views

use crate::config::{PaginationConfig, TableConfig};
use crate::core::filter::FilterState;
use crate::core::page::PageState;
use crate::core::sort::SortState;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Query parameters for pagination, search, filtering and sorting
///
/// This structure is used to extract list parameters from URL query
/// strings. Every parameter is optional and none is ever rejected:
/// out-of-range or non-numeric `page` and `limit` values are clamped or
/// ignored, malformed `filter` or `sort` values fall back to "no filter" /
/// "default sort".
///
/// # Example
/// ```rust,ignore
/// // In handler:
/// pub async fn list_records(
///     Query(params): Query<QueryParams>,
/// ) -> Json<PaginatedResponse<Record>> {
///     // params.page() defaults to 1
///     // params.limit defaults to the table's page size
/// }
///
/// // Usage:
/// GET /dealers?page=2&limit=10
/// GET /dealers?q=apex
/// GET /products?filter={"category": "Brakes", "price>=": 100}&sort=price:desc
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct QueryParams {
    /// Page number (starts at 1)
    #[serde(deserialize_with = "lenient_integer")]
    pub page: Option<i64>,

    /// Number of items per page
    #[serde(deserialize_with = "lenient_integer")]
    pub limit: Option<i64>,

    /// Free-text search query
    pub q: Option<String>,

    /// Filters as JSON object
    ///
    /// # Format
    /// - Exact match: `{"field": "value"}` (`"all"` is a no-op)
    /// - Negation: `{"field!": "value"}`
    /// - Comparison: `{"field>": value, "field<": value, "field>=": value, "field<=": value}`
    pub filter: Option<String>,

    /// Sort field and direction
    ///
    /// # Format
    /// - `field:asc` or `field` (ascending)
    /// - `field:desc` (descending)
    pub sort: Option<String>,
}

impl QueryParams {
    /// Get page number, ensuring minimum of 1
    pub fn page(&self) -> usize {
        to_usize(self.page.unwrap_or(1).max(1))
    }

    /// Get limit, falling back to `default` and clamped to the configured maximum
    pub fn limit(&self, default: usize, pagination: &PaginationConfig) -> usize {
        let requested = self.limit.map_or(default, to_usize);
        pagination.clamp_page_size(requested)
    }

    /// Parse filter JSON string into Value
    pub fn filter_value(&self) -> Option<Value> {
        self.filter
            .as_ref()
            .and_then(|s| serde_json::from_str(s).ok())
    }

    /// Parse the sort expression
    pub fn sort_state(&self) -> Option<SortState> {
        self.sort.as_deref().and_then(SortState::parse)
    }

    /// Build the list query for a table
    pub fn to_list_query(&self, table: &TableConfig, pagination: &PaginationConfig) -> ListQuery {
        let mut filter = self
            .filter_value()
            .map(|value| FilterState::from_json(&value))
            .unwrap_or_default();
        if let Some(q) = &self.q {
            filter.query = q.clone();
        }

        let default_size = table.page_size.unwrap_or(pagination.default_page_size);

        ListQuery {
            filter,
            sort: self.sort_state().or_else(|| table.default_sort()),
            page: PageState::new(self.page(), self.limit(default_size, pagination)),
        }
    }
}

/// Parse an integer query value, treating anything unparseable as absent
fn lenient_integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.trim().parse().ok()))
}

/// Negative values become 0, values beyond `usize` saturate
fn to_usize(value: i64) -> usize {
    usize::try_from(value.max(0)).unwrap_or(usize::MAX)
}

/// Everything needed to derive one list view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
    pub filter: FilterState,
    pub sort: Option<SortState>,
    pub page: PageState,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(mut self, filter: FilterState) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_sort(mut self, sort: SortState) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_page(mut self, page: usize, page_size: usize) -> Self {
        self.page = PageState::new(page, page_size);
        self
    }
}
