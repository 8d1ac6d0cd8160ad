//! Field lookup over table records.
//!
//! Records arrive from the API as loosely shaped JSON. Lookups walk a
//! [`FieldPath`] one segment at a time and report absence explicitly instead
//! of failing, so a malformed row simply does not match a search.

use serde_json::{Number, Value};

use crate::domain::types::FieldPath;

/// A row that can expose the text of its fields for free-text search.
pub trait Searchable {
    /// Returns the searchable text at `path`, or `None` when the field is
    /// missing or null.
    fn field_text(&self, path: &FieldPath) -> Option<String>;
}

/// Walks `path` through nested objects.
///
/// Yields `None` when a segment is missing, or when an intermediate value is
/// not an object (including `null`).
pub fn resolve_path<'a>(record: &'a Value, path: &FieldPath) -> Option<&'a Value> {
    path.segments()
        .try_fold(record, |current, segment| current.as_object()?.get(segment))
}

/// Natural textual form of a resolved value. `null` has none.
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(number_text(n)),
        // Containers only match on their compact JSON text.
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}

/// Whole-valued floats print without a fraction (`1500.00` as `1500`), the
/// way the dashboards display them.
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f == 0.0 => "0".to_string(),
        Some(f) if n.is_f64() && f.is_finite() && f.fract() == 0.0 && f.abs() < 1e21 => {
            format!("{f:.0}")
        }
        _ => n.to_string(),
    }
}

impl Searchable for Value {
    fn field_text(&self, path: &FieldPath) -> Option<String> {
        resolve_path(self, path).and_then(value_text)
    }
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn field_text(&self, path: &FieldPath) -> Option<String> {
        (**self).field_text(path)
    }
}
