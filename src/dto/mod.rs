//! DTO modules that bridge services with views and the CLI.

pub mod table;
