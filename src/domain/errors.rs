// src/domain/errors.rs
use serde::Serialize;
use std::{collections::BTreeMap, fmt};
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid input: {0}")]
    InvalidFields(FieldErrors),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

/// Field-scoped validation messages, keyed by field path (`title`, `title.zh`,
/// `author`, ...). Each present key holds at least one message, in the order
/// the checks produced them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// First message overall, used as the summary line of an error response.
    pub fn first_message(&self) -> Option<&str> {
        self.0
            .values()
            .find_map(|messages| messages.first())
            .map(String::as_str)
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_keeps_message_order_per_field() {
        let mut errors = FieldErrors::new();
        errors.add("author", "first");
        errors.add("title", "other");
        errors.add("author", "second");

        assert_eq!(
            errors.get("author"),
            Some(&["first".to_string(), "second".to_string()][..])
        );
        assert_eq!(errors.first_message(), Some("first"));
        assert_eq!(errors.to_string(), "author: first; author: second; title: other");
    }
}
