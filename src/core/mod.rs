//! Core module containing the list view pipeline and its building blocks

pub mod error;
pub mod field;
pub mod filter;
pub mod page;
pub mod query;
pub mod record;
pub mod service;
pub mod sort;
pub mod view;

pub use error::{ConfigError, ErrorResponse, LoadError, MarketError, TableError};
pub use field::FieldValue;
pub use filter::{Condition, FilterOp, FilterState, filter};
pub use page::{PageState, PaginatedResponse, PaginationMeta, paginate};
pub use query::{ListQuery, QueryParams};
pub use record::Record;
pub use service::RecordSource;
pub use sort::{SortDirection, SortState, sort};
pub use view::{ListState, ListView, derive_view};
