//! Search, filter and paginate rows for dashboard tables.
//!
//! A [`TableQuery`] keeps rows whose search fields contain the search term
//! (case-insensitively), then cuts the requested page out of what is left.
//! The engine is a pure function of its inputs: it never mutates the rows,
//! keeps their relative order, and treats missing fields or out-of-range
//! pages as "no match" / "empty page" rather than as errors.

use serde::Serialize;

use crate::domain::record::Searchable;
use crate::domain::types::{FieldPath, SearchTerm};
use crate::pagination::{PageMeta, PageRequest, Paginated};

/// One page of filtered rows plus its pagination metadata.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct QueryResult<T> {
    pub items: Vec<T>,
    pub pagination: PageMeta,
}

impl<T> QueryResult<T> {
    /// Adds the page-link window used by table footers.
    pub fn into_paginated(self) -> Paginated<T> {
        Paginated::new(self.items, self.pagination)
    }
}

/// Builder for a single table lookup.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableQuery {
    search: Option<SearchTerm>,
    fields: Vec<FieldPath>,
    page: PageRequest,
}

impl TableQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the free-text search. Blank input disables filtering.
    pub fn search(mut self, query: impl AsRef<str>) -> Self {
        self.search = SearchTerm::parse(query);
        self
    }

    pub fn term(mut self, term: Option<SearchTerm>) -> Self {
        self.search = term;
        self
    }

    /// Fields searched by the term, in order.
    pub fn fields(mut self, fields: impl IntoIterator<Item = FieldPath>) -> Self {
        self.fields = fields.into_iter().collect();
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.page = PageRequest::new(page, per_page);
        self
    }

    pub fn page_request(&self) -> PageRequest {
        self.page
    }

    pub fn search_term(&self) -> Option<&SearchTerm> {
        self.search.as_ref()
    }

    /// Whether `record` passes the search filter.
    ///
    /// Without a term every record passes; with a term and no fields none
    /// does.
    pub fn matches<T: Searchable + ?Sized>(&self, record: &T) -> bool {
        let Some(term) = &self.search else {
            return true;
        };

        self.fields.iter().any(|path| {
            record
                .field_text(path)
                .is_some_and(|text| term.is_contained_in(&text.to_lowercase()))
        })
    }

    /// Number of records passing the filter, ignoring pagination.
    pub fn count<T: Searchable>(&self, records: &[T]) -> usize {
        records.iter().filter(|record| self.matches(*record)).count()
    }

    /// Filters `records` and returns the requested page.
    pub fn run<T: Searchable + Clone>(&self, records: &[T]) -> QueryResult<T> {
        let matched: Vec<&T> = records.iter().filter(|record| self.matches(*record)).collect();

        let pagination = PageMeta::new(matched.len(), self.page);
        let items = matched[self.page.bounds(matched.len())]
            .iter()
            .map(|record| (*record).clone())
            .collect();

        QueryResult { items, pagination }
    }
}

/// Filters `records` by `query` over `search_fields`, then returns page
/// `page` of size `per_page`.
///
/// Never fails: pages and sizes below one are treated as one and a page past
/// the end is empty.
pub fn filter_and_paginate<T: Searchable + Clone>(
    records: &[T],
    query: &str,
    search_fields: &[FieldPath],
    page: usize,
    per_page: usize,
) -> QueryResult<T> {
    TableQuery::new()
        .search(query)
        .fields(search_fields.iter().cloned())
        .paginate(page, per_page)
        .run(records)
}

/// Parses dotted paths, skipping the malformed ones. A skipped path could
/// never match, so the result filters the same way.
pub fn parse_fields<S: AsRef<str>>(paths: &[S]) -> Vec<FieldPath> {
    paths
        .iter()
        .filter_map(|raw| match FieldPath::new(raw.as_ref()) {
            Ok(path) => Some(path),
            Err(err) => {
                log::debug!("Ignoring search field {:?}: {err}", raw.as_ref());
                None
            }
        })
        .collect()
}
