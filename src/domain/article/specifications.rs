use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::{Language, contains_ignore_case};

/// Case-insensitive substring match on the title in one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleFilter {
    pub lang: Language,
    pub needle: String,
}

/// Normalized listing filter. Absent parts match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    pub title: Option<TitleFilter>,
    pub author: Option<String>,
}

impl ArticleFilter {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.author.is_none()
    }

    pub fn matches(&self, article: &Article) -> bool {
        ArticleMatchesFilterSpec::new(self, article).is_satisfied()
    }
}

pub struct ArticleMatchesFilterSpec<'a> {
    filter: &'a ArticleFilter,
    article: &'a Article,
}

impl<'a> ArticleMatchesFilterSpec<'a> {
    pub const fn new(filter: &'a ArticleFilter, article: &'a Article) -> Self {
        Self { filter, article }
    }

    pub fn is_satisfied(&self) -> bool {
        self.title_matches() && self.author_matches()
    }

    fn title_matches(&self) -> bool {
        self.filter.title.as_ref().is_none_or(|title| {
            self.article
                .title
                .contains_ignore_case(title.lang, &title.needle)
        })
    }

    fn author_matches(&self) -> bool {
        self.filter
            .author
            .as_deref()
            .is_none_or(|needle| contains_ignore_case(self.article.author.as_str(), needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::entity::{ArticleFields, NewArticle};
    use crate::domain::article::value_objects::{ArticleAuthor, ArticleId, MultilingualField};
    use chrono::Utc;

    fn article(title: MultilingualField, author: &str) -> Article {
        NewArticle::new(
            ArticleFields {
                title,
                content: MultilingualField::new().with(Language::Zh, "內容"),
                author: ArticleAuthor::new(author).unwrap(),
            },
            Utc::now(),
        )
        .into_article(ArticleId(1))
    }

    fn title_filter(lang: Language, needle: &str) -> ArticleFilter {
        ArticleFilter {
            title: Some(TitleFilter {
                lang,
                needle: needle.into(),
            }),
            author: None,
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = ArticleFilter::default();
        assert!(filter.is_empty());
        assert!(filter.matches(&article(MultilingualField::new(), "anyone")));
    }

    #[test]
    fn title_filter_only_looks_at_selected_language() {
        let subject = article(
            MultilingualField::new()
                .with(Language::Zh, "這是測試標題")
                .with(Language::En, "A test title"),
            "作者",
        );
        assert!(title_filter(Language::Zh, "測試").matches(&subject));
        assert!(!title_filter(Language::En, "測試").matches(&subject));
        assert!(title_filter(Language::En, "TEST").matches(&subject));
    }

    #[test]
    fn missing_language_never_matches_active_title_filter() {
        let subject = article(MultilingualField::new().with(Language::En, "Title"), "a");
        assert!(!title_filter(Language::Ja, "").matches(&subject));
    }

    #[test]
    fn author_filter_is_independent_of_language() {
        let subject = article(MultilingualField::new().with(Language::Ja, "x"), "Wang Xiaoming");
        let filter = ArticleFilter {
            title: None,
            author: Some("xiao".into()),
        };
        assert!(filter.matches(&subject));

        let filter = ArticleFilter {
            title: Some(TitleFilter {
                lang: Language::Ja,
                needle: "x".into(),
            }),
            author: Some("li".into()),
        };
        assert!(!filter.matches(&subject));
    }
}
