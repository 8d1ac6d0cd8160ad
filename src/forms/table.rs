use serde::Deserialize;
use validator::Validate;

use crate::domain::table::TableDefinition;
use crate::domain::types::SearchTerm;
use crate::engine::TableQuery;
use crate::forms::FormError;

/// Longest search string accepted from the search box.
pub const MAX_SEARCH_LENGTH: u64 = 200;
/// Largest page size a caller may request.
pub const MAX_ITEMS_PER_PAGE: usize = 100;

#[derive(Debug, Default, Deserialize, Validate)]
/// Query-string parameters sent by a table view (`?search=..&page=..`).
pub struct TableQueryForm {
    /// Free-text search typed by the user.
    #[validate(length(max = MAX_SEARCH_LENGTH))]
    pub search: Option<String>,
    /// One-based page number.
    #[validate(range(min = 1))]
    pub page: Option<usize>,
    /// Rows per page, overriding the table default.
    #[validate(range(min = 1, max = MAX_ITEMS_PER_PAGE))]
    pub per_page: Option<usize>,
}

impl TableQueryForm {
    /// Parses a URL query string such as `search=jane&page=2`.
    pub fn from_query_string(query: &str) -> Result<Self, FormError> {
        serde_html_form::from_str(query.trim_start_matches('?'))
            .map_err(|err| FormError::Parse(err.to_string()))
    }

    /// Trimmed search term, `None` when blank or absent.
    pub fn search_term(&self) -> Option<SearchTerm> {
        self.search.as_deref().and_then(SearchTerm::parse)
    }

    /// Validates the form and builds the engine query for `table`.
    pub fn into_query(self, table: &TableDefinition) -> Result<TableQuery, FormError> {
        self.validate()?;

        let per_page = self.per_page.unwrap_or(table.items_per_page);
        let page = self.page.unwrap_or(1);

        Ok(TableQuery::new()
            .term(self.search_term())
            .fields(table.search_fields.iter().cloned())
            .paginate(page, per_page))
    }
}
