//! DTOs shaped for table views.

use serde::Serialize;
use serde_json::Value;

use crate::pagination::Paginated;

/// Data required to render one page of a dashboard table.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TablePageData {
    /// Name of the table the rows belong to.
    pub table: String,
    /// Paginated rows matching the search.
    pub rows: Paginated<Value>,
    /// Search query echoed back to the view when present.
    pub search_query: Option<String>,
}
