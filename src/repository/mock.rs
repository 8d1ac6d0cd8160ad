//! Mock record source for isolating services in tests.

use mockall::mock;
use serde_json::Value;

use crate::repository::{RecordReader, errors::RepositoryResult};

mock! {
    pub RecordSource {}

    impl RecordReader for RecordSource {
        fn list_records(&self, table: &str) -> RepositoryResult<Vec<Value>>;
    }
}
