//! Record sources and the loaded table catalog

pub mod catalog;
pub mod in_memory;
pub mod json_file;

pub use catalog::{Catalog, Table};
pub use in_memory::InMemoryRecordSource;
pub use json_file::JsonFileSource;
