use crate::domain::article::{
    Article, ArticleFilter, ArticleId, ArticleReadRepository, ArticleUpdate,
    ArticleWriteRepository, NewArticle, PageRequest,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct MemoryState {
    last_id: i64,
    articles: BTreeMap<ArticleId, Article>,
}

/// Process-local article store. Ids are assigned sequentially and never
/// reused, so id order is creation order.
#[derive(Debug, Default)]
pub struct InMemoryArticleRepository {
    state: RwLock<MemoryState>,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut state = self.state.write().await;
        let id = ArticleId::new(state.last_id + 1)?;
        state.last_id = id.0;

        let article = article.into_article(id);
        state.articles.insert(id, article.clone());
        Ok(article)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut state = self.state.write().await;
        let article = state
            .articles
            .get_mut(&update.id)
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        article.overwrite(update);
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut state = self.state.write().await;
        state
            .articles
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("article not found".into()))
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.state.read().await.articles.get(&id).cloned())
    }

    async fn list_page(
        &self,
        filter: &ArticleFilter,
        page: PageRequest,
    ) -> DomainResult<(Vec<Article>, u64)> {
        let state = self.state.read().await;
        let matching: Vec<&Article> = state
            .articles
            .values()
            .filter(|article| filter.matches(article))
            .collect();

        let total = matching.len() as u64;
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let items = matching
            .into_iter()
            .skip(offset)
            .take(page.per_page() as usize)
            .cloned()
            .collect();

        Ok((items, total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::{
        ArticleAuthor, ArticleFields, Language, MultilingualField, TitleFilter,
    };
    use chrono::Utc;

    fn new_article(zh_title: &str, author: &str) -> NewArticle {
        NewArticle::new(
            ArticleFields {
                title: MultilingualField::new().with(Language::Zh, zh_title),
                content: MultilingualField::new().with(Language::Zh, "內容"),
                author: ArticleAuthor::new(author).unwrap(),
            },
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn ids_are_sequential_and_not_reused() {
        let repo = InMemoryArticleRepository::new();
        let first = repo.insert(new_article("一", "a")).await.unwrap();
        let second = repo.insert(new_article("二", "a")).await.unwrap();
        assert_eq!(first.id, ArticleId(1));
        assert_eq!(second.id, ArticleId(2));

        repo.delete(second.id).await.unwrap();
        let third = repo.insert(new_article("三", "a")).await.unwrap();
        assert_eq!(third.id, ArticleId(3));
    }

    #[tokio::test]
    async fn delete_twice_reports_not_found() {
        let repo = InMemoryArticleRepository::new();
        let article = repo.insert(new_article("一", "a")).await.unwrap();

        repo.delete(article.id).await.unwrap();
        assert!(matches!(
            repo.delete(article.id).await,
            Err(DomainError::NotFound(_))
        ));
        assert_eq!(repo.find_by_id(article.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn update_missing_article_reports_not_found() {
        let repo = InMemoryArticleRepository::new();
        let fields = ArticleFields {
            title: MultilingualField::new().with(Language::En, "t"),
            content: MultilingualField::new().with(Language::En, "c"),
            author: ArticleAuthor::new("a").unwrap(),
        };
        let result = repo
            .update(ArticleUpdate::new(ArticleId(9), fields, Utc::now()))
            .await;
        assert!(matches!(result, Err(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn list_page_filters_then_paginates_in_id_order() {
        let repo = InMemoryArticleRepository::new();
        for i in 0..7 {
            let title = if i % 2 == 0 { format!("測試 {i}") } else { format!("其他 {i}") };
            repo.insert(new_article(&title, "作者")).await.unwrap();
        }

        let filter = ArticleFilter {
            title: Some(TitleFilter {
                lang: Language::Zh,
                needle: "測試".into(),
            }),
            author: None,
        };

        let (first, total) = repo.list_page(&filter, PageRequest::new(1, 3)).await.unwrap();
        assert_eq!(total, 4);
        let ids: Vec<i64> = first.iter().map(|a| a.id.0).collect();
        assert_eq!(ids, vec![1, 3, 5]);

        let (second, _) = repo.list_page(&filter, PageRequest::new(2, 3)).await.unwrap();
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].id, ArticleId(7));

        let (beyond, total) = repo.list_page(&filter, PageRequest::new(3, 3)).await.unwrap();
        assert!(beyond.is_empty());
        assert_eq!(total, 4);
    }
}
