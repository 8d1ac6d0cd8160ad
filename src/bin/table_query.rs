//! Prints one page of a dashboard table loaded from saved API responses.

use std::env;
use std::path::PathBuf;

use clap::Parser;
use dotenvy::dotenv;

use faithseeker_tables::forms::table::TableQueryForm;
use faithseeker_tables::models::config::TablesConfig;
use faithseeker_tables::repository::JsonFileRecordSource;
use faithseeker_tables::services::table::load_table_page;

#[derive(Debug, Parser)]
#[command(name = "table-query", about = "Search and paginate a dashboard table")]
struct Args {
    /// Table name from the catalog, e.g. `churches`.
    table: String,
    /// Free-text search.
    #[arg(short, long)]
    search: Option<String>,
    /// One-based page number.
    #[arg(short, long)]
    page: Option<usize>,
    /// Rows per page, overriding the table default.
    #[arg(long)]
    per_page: Option<usize>,
    /// Directory holding `<table>.json` files.
    #[arg(long, default_value = "demos/data")]
    data_dir: PathBuf,
    /// Directory holding `default.yaml` and profile overrides.
    #[arg(long, default_value = "config")]
    config_dir: PathBuf,
}

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let args = Args::parse();

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = match TablesConfig::load(&args.config_dir, &app_env) {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {err}");
            std::process::exit(1);
        }
    };

    let catalog = match settings.into_catalog() {
        Ok(catalog) => catalog,
        Err(err) => {
            log::error!("Error loading table catalog: {err}");
            std::process::exit(1);
        }
    };

    let source = JsonFileRecordSource::new(&args.data_dir);
    let form = TableQueryForm {
        search: args.search,
        page: args.page,
        per_page: args.per_page,
    };

    let data = match load_table_page(&source, &catalog, &args.table, form) {
        Ok(data) => data,
        Err(err) => {
            log::error!("Error loading table {}: {err}", args.table);
            std::process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&data) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            log::error!("Error serializing table page: {err}");
            std::process::exit(1);
        }
    }
}
