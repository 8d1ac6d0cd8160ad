//! Form definitions backing the table views.

use thiserror::Error;
use validator::ValidationErrors;

pub mod table;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("malformed query string: {0}")]
    Parse(String),
}
