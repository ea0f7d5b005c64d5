use super::{ArticleQueryService, resolver::RawListingParams};
use crate::application::{
    dto::{ArticleDto, Paginated},
    error::ApplicationResult,
};

pub struct ListArticlesQuery {
    pub params: RawListingParams,
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Paginated<ArticleDto>> {
        let listing = self.resolver.resolve(&query.params)?;

        let (records, total) = self
            .read_repo
            .list_page(&listing.filter, listing.page)
            .await?;

        tracing::debug!(
            lang = %listing.lang,
            page = listing.page.page(),
            per_page = listing.page.per_page(),
            returned = records.len(),
            total,
            "listed articles"
        );

        let items = records.into_iter().map(Into::into).collect();
        Ok(self.resolver.paginate(&listing, items, total))
    }
}
