//! Derived list views
//!
//! [`derive_view`] is the whole pipeline as one pure function:
//! filter, then sort, then paginate. Nothing is cached; every change of
//! filter, sort or page derives a fresh view from the immutable collection.
//!
//! [`ListState`] owns the interactive state of one table and enforces the
//! page reset policy: any change to the filters or the page size sends the
//! caller back to page 1.

use crate::config::TableConfig;
use crate::core::filter::{FilterState, filter, is_unset};
use crate::core::page::{PageState, PaginatedResponse, paginate};
use crate::core::query::ListQuery;
use crate::core::record::Record;
use crate::core::sort::{SortDirection, SortState, sort};

/// One page of a table, borrowing its rows from the collection
pub type ListView<'a> = PaginatedResponse<&'a Record>;

/// Run filter, sort and pagination over a collection
///
/// # Example
/// ```rust
/// use partsmart::config::{SortField, TableConfig};
/// use partsmart::core::{FilterState, ListQuery, Record, SortState, derive_view};
///
/// let table = TableConfig::new("dealers")
///     .with_search_fields(["name"])
///     .with_filter_fields(["status"])
///     .with_sort_fields([SortField::text("name")]);
///
/// let dealers = vec![
///     Record::new().with("id", "D1").with("name", "Zenith Parts").with("status", "Active"),
///     Record::new().with("id", "D2").with("name", "Apex Auto").with("status", "Active"),
///     Record::new().with("id", "D3").with("name", "Midway Motors").with("status", "Pending"),
/// ];
///
/// let query = ListQuery::new()
///     .with_filter(FilterState::new().with_selection("status", "Active"))
///     .with_sort(SortState::asc("name"))
///     .with_page(1, 10);
///
/// let view = derive_view(&dealers, &query, &table);
/// assert_eq!(view.pagination.total, 2);
/// assert_eq!(view.data[0].id().as_deref(), Some("D2"));
/// ```
pub fn derive_view<'a>(
    records: &'a [Record],
    query: &ListQuery,
    table: &TableConfig,
) -> ListView<'a> {
    let mut rows = filter(records, &query.filter, table);
    if let Some(state) = &query.sort {
        sort(&mut rows, state, table);
    }
    let view = paginate(rows, query.page);

    tracing::debug!(
        table = %table.name,
        total = view.pagination.total,
        page = view.pagination.page,
        rows = view.data.len(),
        "derived list view"
    );

    view
}

/// Interactive filter, sort and page state of one table
#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    query: ListQuery,
}

impl ListState {
    /// Initial state: no filters, the table's default sort, page 1
    pub fn new(table: &TableConfig, page_size: usize) -> Self {
        Self {
            query: ListQuery {
                filter: FilterState::default(),
                sort: table.default_sort(),
                page: PageState::first(page_size.max(1)),
            },
        }
    }

    /// The query the next view will be derived from
    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.query.page.page
    }

    pub fn page_size(&self) -> usize {
        self.query.page.page_size
    }

    pub fn sort(&self) -> Option<&SortState> {
        self.query.sort.as_ref()
    }

    pub fn filter(&self) -> &FilterState {
        &self.query.filter
    }

    /// Set the free-text query; a change resets to page 1
    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if self.query.filter.query != query {
            self.query.filter.query = query;
            self.reset_page();
        }
    }

    /// Select a value for an enum filter (`"all"` clears it); a change resets to page 1
    pub fn select(&mut self, field: impl Into<String>, value: impl Into<String>) {
        let field = field.into();
        let value = value.into();

        let current = self.query.filter.selections.get(&field);
        let unchanged = match current {
            Some(current) => *current == value || (is_unset(current) && is_unset(&value)),
            None => is_unset(&value),
        };
        if unchanged {
            return;
        }

        if is_unset(&value) {
            self.query.filter.selections.shift_remove(&field);
        } else {
            self.query.filter.selections.insert(field, value);
        }
        self.reset_page();
    }

    /// Clear every filter and return to page 1
    pub fn clear_filters(&mut self) {
        self.query.filter = FilterState::default();
        self.reset_page();
    }

    /// Replace the whole filter state; a change resets to page 1
    pub fn set_filter(&mut self, filter: FilterState) {
        if self.query.filter != filter {
            self.query.filter = filter;
            self.reset_page();
        }
    }

    /// Sort by an explicit field and direction
    pub fn sort_by(&mut self, state: SortState) {
        self.query.sort = Some(state);
    }

    /// Column-header click: same field flips direction, a new field sorts ascending
    pub fn toggle_sort(&mut self, field: &str) {
        let next = match &self.query.sort {
            Some(current) if current.field == field => {
                SortState::new(field, current.direction.toggle())
            }
            _ => SortState::new(field, SortDirection::Asc),
        };
        self.query.sort = Some(next);
    }

    /// Jump to a page; out-of-range values are clamped when the view is derived
    pub fn go_to_page(&mut self, page: usize) {
        self.query.page.page = page.max(1);
    }

    pub fn next_page(&mut self) {
        self.query.page.page = self.query.page.page.saturating_add(1);
    }

    pub fn prev_page(&mut self) {
        self.query.page.page = self.query.page.page.saturating_sub(1).max(1);
    }

    /// Change the page size; a change resets to page 1
    pub fn set_page_size(&mut self, page_size: usize) {
        let page_size = page_size.max(1);
        if self.query.page.page_size != page_size {
            self.query.page.page_size = page_size;
            self.reset_page();
        }
    }

    /// Derive the current view and remember the clamped page
    pub fn view<'a>(&mut self, records: &'a [Record], table: &TableConfig) -> ListView<'a> {
        let view = derive_view(records, &self.query, table);
        self.query.page.page = view.pagination.page;
        view
    }

    fn reset_page(&mut self) {
        self.query.page.page = 1;
    }
}
