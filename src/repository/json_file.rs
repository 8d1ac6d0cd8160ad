use std::fs;
use std::path::PathBuf;

use serde_json::Value;

use crate::repository::{
    RecordReader,
    errors::{RepositoryError, RepositoryResult},
};

/// Reads table rows from `<dir>/<table>.json`, e.g. API responses saved to
/// disk.
///
/// The file holds either a JSON array of rows or an object whose `data`
/// field is that array.
#[derive(Clone, Debug)]
pub struct JsonFileRecordSource {
    dir: PathBuf,
}

impl JsonFileRecordSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn table_path(&self, table: &str) -> RepositoryResult<PathBuf> {
        let is_plain_name = !table.is_empty()
            && table
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !is_plain_name {
            return Err(RepositoryError::ValidationError(format!(
                "Invalid table name: {table:?}"
            )));
        }
        Ok(self.dir.join(format!("{table}.json")))
    }
}

fn into_rows(document: Value) -> RepositoryResult<Vec<Value>> {
    match document {
        Value::Array(rows) => Ok(rows),
        Value::Object(mut envelope) => match envelope.remove("data") {
            Some(Value::Array(rows)) => Ok(rows),
            _ => Err(RepositoryError::ValidationError(
                "Expected a `data` array in the response envelope".to_string(),
            )),
        },
        _ => Err(RepositoryError::ValidationError(
            "Expected a JSON array of records".to_string(),
        )),
    }
}

impl RecordReader for JsonFileRecordSource {
    fn list_records(&self, table: &str) -> RepositoryResult<Vec<Value>> {
        let path = self.table_path(table)?;
        let raw = fs::read_to_string(&path).map_err(|err| {
            log::error!("Failed to read {}: {err}", path.display());
            RepositoryError::from(err)
        })?;

        let rows = into_rows(serde_json::from_str(&raw)?)?;
        log::debug!("Loaded {} rows for table {table}", rows.len());
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn accepts_plain_arrays_and_envelopes() {
        assert_eq!(into_rows(json!([{"a": 1}])).unwrap().len(), 1);
        assert_eq!(
            into_rows(json!({"data": [{"a": 1}, {"a": 2}], "total": 2}))
                .unwrap()
                .len(),
            2
        );
    }

    #[test]
    fn rejects_other_documents() {
        assert!(matches!(
            into_rows(json!({"items": []})),
            Err(RepositoryError::ValidationError(_))
        ));
        assert!(matches!(
            into_rows(json!("rows")),
            Err(RepositoryError::ValidationError(_))
        ));
    }

    #[test]
    fn rejects_path_like_table_names() {
        let source = JsonFileRecordSource::new("data");
        for name in ["", "../secrets", "a/b", "users.json"] {
            assert!(matches!(
                source.list_records(name),
                Err(RepositoryError::ValidationError(_))
            ));
        }
    }
}
