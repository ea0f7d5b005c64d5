// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleAuthor, ArticleId, MultilingualField};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: ArticleId,
    pub title: MultilingualField,
    pub content: MultilingualField,
    pub author: ArticleAuthor,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Replace every editable field. Languages missing from the new values
    /// are dropped, not carried over.
    pub fn overwrite(&mut self, update: ArticleUpdate) {
        self.title = update.title;
        self.content = update.content;
        self.author = update.author;
        self.updated_at = update.updated_at;
    }
}

/// Validated writable fields shared by create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleFields {
    pub title: MultilingualField,
    pub content: MultilingualField,
    pub author: ArticleAuthor,
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: MultilingualField,
    pub content: MultilingualField,
    pub author: ArticleAuthor,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewArticle {
    pub fn new(fields: ArticleFields, now: DateTime<Utc>) -> Self {
        let ArticleFields {
            title,
            content,
            author,
        } = fields;
        Self {
            title,
            content,
            author,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn into_article(self, id: ArticleId) -> Article {
        Article {
            id,
            title: self.title,
            content: self.content,
            author: self.author,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Full-field replacement of an existing article.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: MultilingualField,
    pub content: MultilingualField,
    pub author: ArticleAuthor,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, fields: ArticleFields, updated_at: DateTime<Utc>) -> Self {
        let ArticleFields {
            title,
            content,
            author,
        } = fields;
        Self {
            id,
            title,
            content,
            author,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::value_objects::Language;
    use chrono::Utc;

    fn sample_article() -> Article {
        let now = Utc::now();
        NewArticle::new(
            ArticleFields {
                title: MultilingualField::new()
                    .with(Language::Zh, "標題")
                    .with(Language::En, "Title")
                    .with(Language::Ja, "タイトル"),
                content: MultilingualField::new().with(Language::Zh, "內容"),
                author: ArticleAuthor::new("作者").unwrap(),
            },
            now,
        )
        .into_article(ArticleId::new(1).unwrap())
    }

    #[test]
    fn new_article_uses_single_timestamp() {
        let article = sample_article();
        assert_eq!(article.created_at, article.updated_at);
        assert_eq!(article.id, ArticleId(1));
    }

    #[test]
    fn overwrite_drops_languages_missing_from_update() {
        let mut article = sample_article();
        let later = article.updated_at + chrono::Duration::seconds(10);
        let update = ArticleUpdate::new(
            article.id,
            ArticleFields {
                title: MultilingualField::new().with(Language::Zh, "新標題"),
                content: MultilingualField::new().with(Language::En, "Body"),
                author: ArticleAuthor::new("新作者").unwrap(),
            },
            later,
        );

        article.overwrite(update);

        assert_eq!(article.title.len(), 1);
        assert_eq!(article.title.get(Language::Zh), Some("新標題"));
        assert_eq!(article.title.get(Language::En), None);
        assert_eq!(article.content.get(Language::Zh), None);
        assert_eq!(article.author.as_str(), "新作者");
        assert_eq!(article.updated_at, later);
        assert!(article.created_at < article.updated_at);
    }
}
