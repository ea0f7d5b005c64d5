pub mod articles;
pub mod pagination;
pub mod serde_time;

pub use articles::{ArticleDto, LocalizedText};
pub use pagination::{Paginated, PaginationLinks, PaginationMeta};
