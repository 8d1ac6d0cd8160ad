use serde_json::Value;

use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod json_file;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use json_file::JsonFileRecordSource;

/// Supplies the raw rows of a dashboard table.
///
/// In production the rows come from the FaithSeeker REST API; the engine only
/// sees them as opaque JSON values.
pub trait RecordReader {
    fn list_records(&self, table: &str) -> RepositoryResult<Vec<Value>>;
}

impl<R: RecordReader + ?Sized> RecordReader for &R {
    fn list_records(&self, table: &str) -> RepositoryResult<Vec<Value>> {
        (**self).list_records(table)
    }
}
