// src/application/error.rs
use crate::domain::errors::{DomainError, FieldErrors};
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("invalid input: {0}")]
    InvalidFields(FieldErrors),

    #[error("resource not found: {0}")]
    NotFound(String),
}

impl ApplicationError {
    pub fn field(field: impl Into<String>, msg: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.add(field, msg);
        Self::InvalidFields(errors)
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}
