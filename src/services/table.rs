//! Loads one page of a dashboard table.

use crate::domain::table::TableCatalog;
use crate::dto::table::TablePageData;
use crate::forms::table::TableQueryForm;
use crate::repository::RecordReader;
use crate::services::{ServiceError, ServiceResult};

/// Fetches the rows of `table`, applies the search and returns the requested
/// page.
pub fn load_table_page<R>(
    repo: &R,
    catalog: &TableCatalog,
    table: &str,
    form: TableQueryForm,
) -> ServiceResult<TablePageData>
where
    R: RecordReader + ?Sized,
{
    let definition = catalog.get(table).ok_or_else(|| {
        log::error!("Requested unknown table {table}");
        ServiceError::UnknownTable(table.to_string())
    })?;

    let query = form.into_query(definition).map_err(|err| {
        log::error!("Failed to validate table query: {err}");
        err
    })?;

    let records = repo.list_records(table).map_err(|err| {
        log::error!("Failed to load records for {table}: {err}");
        err
    })?;

    let result = query.run(&records);
    log::debug!(
        "Table {table}: {} of {} rows on page {}",
        result.items.len(),
        result.pagination.total_items,
        result.pagination.current_page
    );

    Ok(TablePageData {
        table: definition.name.clone(),
        rows: result.into_paginated(),
        search_query: query.search_term().map(|term| term.as_str().to_string()),
    })
}
