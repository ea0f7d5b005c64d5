// src/application/queries/articles/resolver.rs
use crate::{
    application::{
        dto::{Paginated, PaginationLinks, PaginationMeta},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleFilter, Language, PageRequest, TitleFilter},
};

pub const DEFAULT_PER_PAGE: u32 = 15;
pub const MAX_PER_PAGE: u32 = 100;

/// Listing defaults supplied by configuration.
#[derive(Debug, Clone)]
pub struct ListingDefaults {
    pub language: Language,
    pub per_page: u32,
    pub max_per_page: u32,
    /// Public URL of the listing endpoint, used for `meta.path` and links.
    pub path: String,
}

impl ListingDefaults {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            language: Language::default(),
            per_page: DEFAULT_PER_PAGE,
            max_per_page: MAX_PER_PAGE,
            path: path.into(),
        }
    }
}

/// Query parameters exactly as received.
#[derive(Debug, Clone, Default)]
pub struct RawListingParams {
    pub lang: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub page: Option<String>,
    pub per_page: Option<String>,
}

/// Normalized listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedListing {
    pub lang: Language,
    pub filter: ArticleFilter,
    pub page: PageRequest,
    /// Parameters the client supplied that every pagination link keeps.
    pub link_params: Vec<(&'static str, String)>,
}

pub struct ArticleQueryResolver {
    defaults: ListingDefaults,
}

impl ArticleQueryResolver {
    pub fn new(defaults: ListingDefaults) -> Self {
        let max_per_page = defaults.max_per_page.max(1);
        let defaults = ListingDefaults {
            per_page: defaults.per_page.clamp(1, max_per_page),
            max_per_page,
            ..defaults
        };
        Self { defaults }
    }

    pub fn resolve(&self, raw: &RawListingParams) -> ApplicationResult<ResolvedListing> {
        let mut link_params = Vec::new();

        let lang = match non_blank(raw.lang.as_deref()) {
            Some(code) => {
                let lang = Language::from_code(code).ok_or_else(|| {
                    ApplicationError::field(
                        "lang",
                        format!(
                            "unsupported language, expected one of: {}",
                            Language::supported_codes()
                        ),
                    )
                })?;
                link_params.push(("lang", lang.code().to_string()));
                lang
            }
            None => self.defaults.language,
        };

        let title = non_blank(raw.title.as_deref()).map(|needle| {
            link_params.push(("title", needle.to_string()));
            TitleFilter {
                lang,
                needle: needle.to_string(),
            }
        });

        let author = non_blank(raw.author.as_deref()).map(|needle| {
            link_params.push(("author", needle.to_string()));
            needle.to_string()
        });

        let per_page = match non_blank(raw.per_page.as_deref()) {
            Some(value) => {
                let per_page = parse_count(value).map_or(self.defaults.per_page, |n| {
                    clamp_count(n, 1, self.defaults.max_per_page)
                });
                link_params.push(("per_page", per_page.to_string()));
                per_page
            }
            None => self.defaults.per_page,
        };

        let page = non_blank(raw.page.as_deref())
            .and_then(parse_count)
            .map_or(1, |n| clamp_count(n, 1, u32::MAX));

        Ok(ResolvedListing {
            lang,
            filter: ArticleFilter { title, author },
            page: PageRequest::new(page, per_page),
            link_params,
        })
    }

    pub fn paginate<T>(&self, listing: &ResolvedListing, items: Vec<T>, total: u64) -> Paginated<T> {
        let meta = PaginationMeta::compute(listing.page, total, self.defaults.path.clone());
        let links = PaginationLinks::build(&meta, &listing.link_params);
        Paginated::new(items, links, meta)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_count(value: &str) -> Option<i64> {
    value.parse::<i64>().ok()
}

fn clamp_count(value: i64, min: u32, max: u32) -> u32 {
    u32::try_from(value.clamp(i64::from(min), i64::from(max))).unwrap_or(min)
}
