use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize, Serializer, ser::SerializeMap};
use std::{collections::BTreeMap, fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleId(pub i64);

impl ArticleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "article id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }

    /// Parse an identifier as it appears in a request path.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let id = raw
            .trim()
            .parse::<i64>()
            .map_err(|_| DomainError::Validation(format!("invalid article id: {raw}")))?;
        Self::new(id)
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Supported content languages. Declaration order is the serialization order
/// of multilingual maps.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Zh,
    En,
    Ja,
}

impl Language {
    pub const ALL: [Self; 3] = [Self::Zh, Self::En, Self::Ja];

    pub const fn code(self) -> &'static str {
        match self {
            Self::Zh => "zh",
            Self::En => "en",
            Self::Ja => "ja",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }

    pub fn supported_codes() -> String {
        Self::ALL
            .iter()
            .map(|lang| lang.code())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s.trim()).ok_or_else(|| {
            DomainError::Validation(format!(
                "unsupported language `{s}`, expected one of: {}",
                Self::supported_codes()
            ))
        })
    }
}

/// The same logical text in several languages. Languages may be missing; a
/// value only counts as populated when it is non-empty after trimming.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultilingualField(BTreeMap<Language, String>);

impl MultilingualField {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, lang: Language, value: impl Into<String>) -> Self {
        self.insert(lang, value);
        self
    }

    pub fn insert(&mut self, lang: Language, value: impl Into<String>) {
        self.0.insert(lang, value.into());
    }

    pub fn get(&self, lang: Language) -> Option<&str> {
        self.0.get(&lang).map(String::as_str)
    }

    pub fn has_any_value(&self) -> bool {
        self.0.values().any(|value| !value.trim().is_empty())
    }

    /// Case-insensitive substring match on a single language. A missing
    /// language never matches.
    pub fn contains_ignore_case(&self, lang: Language, needle: &str) -> bool {
        self.get(lang)
            .is_some_and(|value| contains_ignore_case(value, needle))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Language, &str)> {
        self.0.iter().map(|(lang, value)| (*lang, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_code_map(&self) -> BTreeMap<String, String> {
        self.iter()
            .map(|(lang, value)| (lang.code().to_string(), value.to_string()))
            .collect()
    }

    /// Rebuild a field from a code-keyed map, as stored by persistence
    /// backends. Unknown codes are rejected.
    pub fn try_from_code_map(map: BTreeMap<String, String>) -> DomainResult<Self> {
        map.into_iter()
            .map(|(code, value)| Ok((code.parse::<Language>()?, value)))
            .collect::<DomainResult<BTreeMap<_, _>>>()
            .map(Self)
    }
}

impl FromIterator<(Language, String)> for MultilingualField {
    fn from_iter<I: IntoIterator<Item = (Language, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for MultilingualField {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (lang, value) in &self.0 {
            map.serialize_entry(lang.code(), value)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleAuthor(String);

impl ArticleAuthor {
    pub const MAX_CHARS: usize = 20;

    /// Surrounding whitespace is dropped before the length check.
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into().trim().to_string();
        let length = value.chars().count();
        if length == 0 {
            return Err(DomainError::Validation("author cannot be empty".into()));
        }
        if length > Self::MAX_CHARS {
            return Err(DomainError::Validation(format!(
                "author must not be greater than {} characters",
                Self::MAX_CHARS
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleAuthor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ArticleAuthor> for String {
    fn from(value: ArticleAuthor) -> Self {
        value.0
    }
}

pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
