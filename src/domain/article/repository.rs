use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::specifications::ArticleFilter;
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// One window of a listing. Both numbers are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    per_page: u32,
}

impl PageRequest {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    pub const fn page(&self) -> u32 {
        self.page
    }

    pub const fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.per_page)
    }
}

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    /// Fails with `NotFound` when the article no longer exists.
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article>;
    /// Fails with `NotFound` when the article no longer exists.
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    /// Returns the requested page in ascending id order together with the
    /// number of matching articles across all pages.
    async fn list_page(
        &self,
        filter: &ArticleFilter,
        page: PageRequest,
    ) -> DomainResult<(Vec<Article>, u64)>;
}
