// src/application/dto/serde_time.rs
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serializer;

pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Micros, true))
}
