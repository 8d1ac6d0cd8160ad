//! Services coordinating table workflows.

use thiserror::Error;

use crate::forms::FormError;
use crate::repository::errors::RepositoryError;

pub mod table;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("unknown table: {0}")]
    UnknownTable(String),

    #[error("form error: {0}")]
    Form(#[from] FormError),

    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
