// src/domain/article/validator.rs
use crate::domain::article::entity::ArticleFields;
use crate::domain::article::value_objects::{ArticleAuthor, Language, MultilingualField};
use crate::domain::errors::{DomainError, DomainResult, FieldErrors};
use serde_json::Value;

pub const MISSING_LANGUAGE_MESSAGE: &str = "at least one language must be provided";

/// Validates raw create/update payloads. Every rule runs before the result is
/// reported, so a single response lists all failing fields.
pub struct ArticleValidator;

impl ArticleValidator {
    pub fn validate(payload: &Value) -> DomainResult<ArticleFields> {
        let mut errors = FieldErrors::new();

        let title = Self::multilingual("title", payload.get("title"), &mut errors);
        let content = Self::multilingual("content", payload.get("content"), &mut errors);
        let author = Self::author(payload.get("author"), &mut errors);

        match (title, content, author) {
            (Some(title), Some(content), Some(author)) if errors.is_empty() => Ok(ArticleFields {
                title,
                content,
                author,
            }),
            _ => Err(DomainError::InvalidFields(errors)),
        }
    }

    fn multilingual(
        field: &str,
        raw: Option<&Value>,
        errors: &mut FieldErrors,
    ) -> Option<MultilingualField> {
        let entries = match raw {
            None | Some(Value::Null) => {
                errors.add(field, format!("{field} is required"));
                return None;
            }
            Some(Value::Object(entries)) => entries,
            Some(_) => {
                errors.add(field, format!("{field} must be an object keyed by language"));
                return None;
            }
        };

        let mut value = MultilingualField::new();
        for (code, raw_text) in entries {
            let path = format!("{field}.{code}");
            let Some(lang) = Language::from_code(code) else {
                errors.add(
                    path,
                    format!(
                        "unsupported language, expected one of: {}",
                        Language::supported_codes()
                    ),
                );
                continue;
            };
            match raw_text {
                Value::String(text) => value.insert(lang, text.as_str()),
                Value::Null => {}
                _ => errors.add(path, format!("{field}.{code} must be a string or null")),
            }
        }

        if !value.has_any_value() {
            errors.add(field, MISSING_LANGUAGE_MESSAGE);
        }

        Some(value)
    }

    fn author(raw: Option<&Value>, errors: &mut FieldErrors) -> Option<ArticleAuthor> {
        match raw {
            None | Some(Value::Null) => {
                errors.add("author", "author is required");
                None
            }
            Some(Value::String(text)) => match ArticleAuthor::new(text.as_str()) {
                Ok(author) => Some(author),
                Err(err) => {
                    errors.add("author", validation_message(err));
                    None
                }
            },
            Some(_) => {
                errors.add("author", "author must be a string");
                None
            }
        }
    }
}

fn validation_message(err: DomainError) -> String {
    match err {
        DomainError::Validation(message) => message,
        other => other.to_string(),
    }
}
