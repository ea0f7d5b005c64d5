mod get_by_id;
mod list;
mod resolver;
mod service;

pub use get_by_id::GetArticleByIdQuery;
pub use list::ListArticlesQuery;
pub use resolver::{
    ArticleQueryResolver, DEFAULT_PER_PAGE, ListingDefaults, MAX_PER_PAGE, RawListingParams,
    ResolvedListing,
};
pub use service::ArticleQueryService;
