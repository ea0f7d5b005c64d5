use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::{DomainError, FieldErrors};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

const INVALID_DATA_MESSAGE: &str = "the given data was invalid";

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
    errors: Option<FieldErrors>,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::InvalidFields(fields)
            | ApplicationError::Domain(DomainError::InvalidFields(fields)) => {
                Self::invalid_fields(fields)
            }
            ApplicationError::Domain(DomainError::Validation(msg)) => {
                Self::new(StatusCode::UNPROCESSABLE_ENTITY, msg)
            }
            ApplicationError::NotFound(msg) | ApplicationError::Domain(DomainError::NotFound(msg)) => {
                Self::new(StatusCode::NOT_FOUND, msg)
            }
            ApplicationError::Domain(DomainError::Persistence(msg)) => {
                tracing::error!(error = %msg, "request failed");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".into(),
                )
            }
        }
    }

    fn invalid_fields(fields: FieldErrors) -> Self {
        let message = fields
            .first_message()
            .unwrap_or(INVALID_DATA_MESSAGE)
            .to_string();
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message,
            errors: Some(fields),
        }
    }

    pub(crate) const fn new(status: StatusCode, message: String) -> Self {
        Self {
            status,
            message,
            errors: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message.into())
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            message: self.message,
            errors: self.errors,
        };
        (self.status, Json(payload)).into_response()
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    /// Field path to messages; present on 422 responses caused by payload
    /// validation.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub errors: Option<FieldErrors>,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
