use std::fs;

use faithseeker_tables::forms::table::TableQueryForm;
use faithseeker_tables::models::config::TablesConfig;
use faithseeker_tables::repository::errors::RepositoryError;
use faithseeker_tables::repository::{JsonFileRecordSource, RecordReader};
use faithseeker_tables::services::ServiceError;
use faithseeker_tables::services::table::load_table_page;
use tempfile::TempDir;

const CONFIG: &str = r#"
default_items_per_page: 2
tables:
  staff:
    search_fields: [fullName, role.name]
  notifications:
    search_fields: [title]
    items_per_page: 5
"#;

const STAFF: &str = r#"[
  {"fullName": "Ada Obi", "role": {"name": "Treasurer"}},
  {"fullName": "Ben Cole", "role": {"name": "Usher"}},
  {"fullName": "Cara Diaz", "role": null},
  {"fullName": "Dan Eze", "role": {"name": "Treasurer Assistant"}}
]"#;

fn fixture() -> TempDir {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::create_dir(dir.path().join("config")).unwrap();
    fs::create_dir(dir.path().join("data")).unwrap();
    fs::write(dir.path().join("config/default.yaml"), CONFIG).unwrap();
    fs::write(dir.path().join("data/staff.json"), STAFF).unwrap();
    fs::write(dir.path().join("data/notifications.json"), "{not json").unwrap();
    dir
}

#[test]
fn test_loads_catalog_from_config_dir() {
    let dir = fixture();
    let catalog = TablesConfig::load(dir.path().join("config"), "test")
        .unwrap()
        .into_catalog()
        .unwrap();

    assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["notifications", "staff"]);
    assert_eq!(catalog.get("staff").unwrap().items_per_page, 2);
    assert_eq!(catalog.get("notifications").unwrap().items_per_page, 5);
}

#[test]
fn test_profile_file_overrides_default() {
    let dir = fixture();
    fs::write(
        dir.path().join("config/test.yaml"),
        "default_items_per_page: 7\n",
    )
    .unwrap();

    let settings = TablesConfig::load(dir.path().join("config"), "test").unwrap();
    assert_eq!(settings.default_items_per_page, 7);
    assert_eq!(settings.tables.len(), 2);
}

#[test]
fn test_missing_default_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(TablesConfig::load(dir.path(), "local").is_err());
}

#[test]
fn test_json_file_source_errors() {
    let dir = fixture();
    let source = JsonFileRecordSource::new(dir.path().join("data"));

    assert_eq!(source.list_records("staff").unwrap().len(), 4);
    assert!(matches!(
        source.list_records("churches"),
        Err(RepositoryError::NotFound(_))
    ));
    assert!(matches!(
        source.list_records("notifications"),
        Err(RepositoryError::ValidationError(_))
    ));
}

#[test]
fn test_table_page_end_to_end() {
    let dir = fixture();
    let catalog = TablesConfig::load(dir.path().join("config"), "test")
        .unwrap()
        .into_catalog()
        .unwrap();
    let source = JsonFileRecordSource::new(dir.path().join("data"));

    let form = TableQueryForm::from_query_string("search=treasurer&page=1").unwrap();
    let data = load_table_page(&source, &catalog, "staff", form).unwrap();

    assert_eq!(data.search_query.as_deref(), Some("treasurer"));
    assert_eq!(data.rows.pagination.total_items, 2);
    assert_eq!(data.rows.items[0]["fullName"], "Ada Obi");
    assert_eq!(data.rows.items[1]["fullName"], "Dan Eze");

    let form = TableQueryForm::from_query_string("page=2").unwrap();
    let data = load_table_page(&source, &catalog, "staff", form).unwrap();
    assert_eq!(data.rows.items.len(), 2);
    assert_eq!(data.rows.items[0]["fullName"], "Cara Diaz");

    let form = TableQueryForm::default();
    let result = load_table_page(&source, &catalog, "notifications", form);
    assert!(matches!(
        result,
        Err(ServiceError::Repository(RepositoryError::ValidationError(_)))
    ));
}
