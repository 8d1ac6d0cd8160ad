//! Configuration model loaded from external sources.

use std::collections::BTreeMap;
use std::path::Path;

use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;

use crate::domain::table::{TableCatalog, TableDefinition};
use crate::domain::types::FieldPath;
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load settings: {0}")]
    Load(#[from] config::ConfigError),

    #[error("table `{table}` has invalid search field `{field}`")]
    InvalidSearchField { table: String, field: String },
}

fn default_items_per_page() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

#[derive(Clone, Debug, Deserialize)]
/// Per-table settings.
pub struct TableConfig {
    #[serde(default)]
    pub search_fields: Vec<String>,
    pub items_per_page: Option<usize>,
}

#[derive(Clone, Debug, Deserialize)]
/// Table catalog settings shared by the dashboards.
pub struct TablesConfig {
    #[serde(default = "default_items_per_page")]
    pub default_items_per_page: usize,
    #[serde(default)]
    pub tables: BTreeMap<String, TableConfig>,
}

impl TablesConfig {
    /// Loads `<dir>/default`, the optional `<dir>/<app_env>` override and
    /// `APP_`-prefixed environment variables, in that order of precedence.
    pub fn load(dir: impl AsRef<Path>, app_env: &str) -> Result<Self, ConfigError> {
        let dir = dir.as_ref();
        let settings = Config::builder()
            .add_source(File::from(dir.join("default")))
            .add_source(File::from(dir.join(app_env)).required(false))
            .add_source(Environment::with_prefix("APP"))
            .build()?;

        Ok(settings.try_deserialize::<TablesConfig>()?)
    }

    /// Validates every search field and resolves page sizes.
    pub fn into_catalog(self) -> Result<TableCatalog, ConfigError> {
        let mut catalog = TableCatalog::new();

        for (name, table) in self.tables {
            let search_fields = table
                .search_fields
                .iter()
                .map(|field| {
                    FieldPath::new(field.as_str()).map_err(|_| ConfigError::InvalidSearchField {
                        table: name.clone(),
                        field: field.clone(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;

            let items_per_page = table.items_per_page.unwrap_or(self.default_items_per_page);
            catalog.insert(TableDefinition::new(name, search_fields, items_per_page));
        }

        Ok(catalog)
    }
}

impl TryFrom<TablesConfig> for TableCatalog {
    type Error = ConfigError;

    fn try_from(value: TablesConfig) -> Result<Self, Self::Error> {
        value.into_catalog()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> TablesConfig {
        Config::builder()
            .add_source(File::from_str(yaml, config::FileFormat::Yaml))
            .build()
            .and_then(Config::try_deserialize)
            .expect("valid settings")
    }

    #[test]
    fn builds_catalog_with_defaults() {
        let settings = parse(
            r#"
default_items_per_page: 15
tables:
  churches:
    search_fields: [name, owner.fullName]
  users:
    search_fields: [email]
    items_per_page: 50
"#,
        );

        let catalog = settings.into_catalog().unwrap();
        let churches = catalog.get("churches").unwrap();
        assert_eq!(churches.items_per_page, 15);
        assert_eq!(churches.search_fields[1].as_str(), "owner.fullName");
        assert_eq!(catalog.get("users").unwrap().items_per_page, 50);
    }

    #[test]
    fn missing_page_size_falls_back_to_constant() {
        let settings = parse("tables:\n  staff:\n    search_fields: [name]\n");
        assert_eq!(settings.default_items_per_page, DEFAULT_ITEMS_PER_PAGE);
    }

    #[test]
    fn invalid_search_field_names_table() {
        let settings = parse("tables:\n  staff:\n    search_fields: ['role..name']\n");

        match settings.into_catalog() {
            Err(ConfigError::InvalidSearchField { table, field }) => {
                assert_eq!(table, "staff");
                assert_eq!(field, "role..name");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
