use crate::domain::article::{Article, MultilingualField};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    #[schema(value_type = LocalizedText)]
    pub title: MultilingualField,
    #[schema(value_type = LocalizedText)]
    pub content: MultilingualField,
    #[schema(max_length = 20, example = "王小明")]
    pub author: String,
    #[serde(serialize_with = "serde_time::serialize")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "serde_time::serialize")]
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title,
            content: article.content,
            author: article.author.into_inner(),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

/// Documentation shape of a multilingual value. Only submitted languages
/// are present on the wire.
#[derive(Debug, Clone, Default, Serialize, ToSchema)]
pub struct LocalizedText {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(nullable, example = "中文標題")]
    pub zh: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(nullable, example = "English Title")]
    pub en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(nullable, example = "日本語のタイトル")]
    pub ja: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::{ArticleAuthor, ArticleFields, ArticleId, Language, NewArticle};
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn serializes_only_present_languages() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let article = NewArticle::new(
            ArticleFields {
                title: MultilingualField::new()
                    .with(Language::Zh, "只有中文標題")
                    .with(Language::En, "Only English and Chinese titles"),
                content: MultilingualField::new().with(Language::Zh, "內容"),
                author: ArticleAuthor::new("測試作者").unwrap(),
            },
            now,
        )
        .into_article(ArticleId(3));

        let value = serde_json::to_value(ArticleDto::from(article)).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 3,
                "title": { "zh": "只有中文標題", "en": "Only English and Chinese titles" },
                "content": { "zh": "內容" },
                "author": "測試作者",
                "created_at": "2024-01-01T00:00:00.000000Z",
                "updated_at": "2024-01-01T00:00:00.000000Z"
            })
        );
    }
}
