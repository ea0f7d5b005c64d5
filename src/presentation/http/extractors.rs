// src/presentation/http/extractors.rs
use super::error::HttpError;
use crate::application::queries::articles::RawListingParams;
use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Request},
    http::request::Parts,
};
use serde_json::{Map, Value};

/// Body of a create or update request. The content type is not checked and
/// an absent or blank body reads as `{}`, so missing fields surface as
/// validation errors.
#[derive(Debug, Clone)]
pub struct JsonPayload(pub Value);

impl<S> FromRequest<S> for JsonPayload
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| HttpError::new(rejection.status(), rejection.body_text()))?;
        parse_payload(&bytes).map(Self)
    }
}

fn parse_payload(bytes: &[u8]) -> Result<Value, HttpError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_slice(bytes)
        .map_err(|err| HttpError::bad_request(format!("request body is not valid JSON: {err}")))
}

/// Listing query string. Unknown keys are ignored; a repeated key keeps its
/// last value.
#[derive(Debug, Clone, Default)]
pub struct ListingQuery(pub RawListingParams);

impl<S> FromRequestParts<S> for ListingQuery
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parse_listing_query(parts.uri.query().unwrap_or_default()).map(Self)
    }
}

fn parse_listing_query(query: &str) -> Result<RawListingParams, HttpError> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query)
        .map_err(|err| HttpError::bad_request(format!("invalid query string: {err}")))?;

    let mut params = RawListingParams::default();
    for (key, value) in pairs {
        let slot = match key.as_str() {
            "lang" => &mut params.lang,
            "title" => &mut params.title,
            "author" => &mut params.author,
            "page" => &mut params.page,
            "per_page" => &mut params.per_page,
            _ => continue,
        };
        *slot = Some(value);
    }
    Ok(params)
}
