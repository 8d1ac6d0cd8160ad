//! Named dashboard tables and the fields each one searches.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::types::FieldPath;

/// A dashboard table: its name, searchable fields and page size.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TableDefinition {
    pub name: String,
    pub search_fields: Vec<FieldPath>,
    pub items_per_page: usize,
}

impl TableDefinition {
    /// Builds a definition, coercing a zero page size to one row.
    pub fn new(name: impl Into<String>, search_fields: Vec<FieldPath>, items_per_page: usize) -> Self {
        Self {
            name: name.into(),
            search_fields,
            items_per_page: items_per_page.max(1),
        }
    }
}

/// Registry of tables known to the dashboards.
#[derive(Clone, Debug, Default)]
pub struct TableCatalog {
    tables: BTreeMap<String, TableDefinition>,
}

impl TableCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a table definition.
    pub fn insert(&mut self, table: TableDefinition) {
        self.tables.insert(table.name.clone(), table);
    }

    pub fn with_table(mut self, table: TableDefinition) -> Self {
        self.insert(table);
        self
    }

    pub fn get(&self, name: &str) -> Option<&TableDefinition> {
        self.tables.get(name)
    }

    /// Table names in lexical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_page_size_becomes_one() {
        let table = TableDefinition::new("users", vec![], 0);
        assert_eq!(table.items_per_page, 1);
    }

    #[test]
    fn catalog_lookup_by_name() {
        let catalog = TableCatalog::new()
            .with_table(TableDefinition::new(
                "users",
                vec![FieldPath::new("email").unwrap()],
                20,
            ))
            .with_table(TableDefinition::new("churches", vec![], 10));

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["churches", "users"]);
        assert_eq!(catalog.get("users").map(|t| t.items_per_page), Some(20));
        assert!(catalog.get("payments").is_none());
    }
}
