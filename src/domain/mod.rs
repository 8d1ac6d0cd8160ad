//! Domain types shared by the table query engine and services.

pub mod record;
pub mod table;
pub mod types;
