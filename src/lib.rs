//! Search, filtering and pagination for the FaithSeeker dashboard tables.
//!
//! Rows arrive from the REST API as JSON. [`engine::filter_and_paginate`]
//! keeps the rows whose configured fields contain the search text and cuts out
//! the requested page; the surrounding modules load the table catalog from
//! configuration, parse query strings and fetch rows.

pub mod domain;
pub mod dto;
pub mod engine;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod services;

pub use engine::{QueryResult, TableQuery, filter_and_paginate};
