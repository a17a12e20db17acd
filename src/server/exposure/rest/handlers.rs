//! HTTP handlers for table operations

use crate::config::{SortField, TableConfig};
use crate::core::{MarketError, QueryParams};
use crate::server::host::ServerHost;
use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;

/// Summary of one table for `GET /tables`
#[derive(Debug, Serialize)]
pub struct TableSummary<'a> {
    pub name: &'a str,
    pub records: usize,
    pub page_size: usize,
    pub search_fields: &'a [String],
    pub filter_fields: &'a [String],
    pub sort_fields: &'a [SortField],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_sort: Option<&'a str>,
}

impl<'a> TableSummary<'a> {
    fn new(config: &'a TableConfig, records: usize, page_size: usize) -> Self {
        Self {
            name: &config.name,
            records,
            page_size,
            search_fields: &config.search_fields,
            filter_fields: &config.filter_fields,
            sort_fields: &config.sort_fields,
            default_sort: config.default_sort.as_deref(),
        }
    }
}

/// List the loaded tables
///
/// GET /tables
pub async fn list_tables(State(host): State<Arc<ServerHost>>) -> Response {
    let tables: Vec<TableSummary<'_>> = host
        .catalog
        .tables()
        .map(|table| {
            TableSummary::new(
                table.config(),
                table.len(),
                host.config.page_size_for(table.config()),
            )
        })
        .collect();

    Json(tables).into_response()
}

/// One page of a table
///
/// GET /{table}?page=&limit=&q=&filter=&sort=
pub async fn list_records(
    State(host): State<Arc<ServerHost>>,
    Path(table): Path<String>,
    Query(params): Query<QueryParams>,
) -> Result<Response, MarketError> {
    let view = host.list(&table, &params)?;
    Ok(Json(view).into_response())
}

/// A single record
///
/// GET /{table}/{id}
pub async fn get_record(
    State(host): State<Arc<ServerHost>>,
    Path((table, id)): Path<(String, String)>,
) -> Result<Response, MarketError> {
    let record = host.get(&table, &id)?;
    Ok(Json(record).into_response())
}
