pub mod entity;
pub mod repository;
pub mod specifications;
pub mod validator;
pub mod value_objects;

pub use entity::{Article, ArticleFields, ArticleUpdate, NewArticle};
pub use repository::{ArticleReadRepository, ArticleWriteRepository, PageRequest};
pub use specifications::{ArticleFilter, TitleFilter};
pub use validator::ArticleValidator;
pub use value_objects::{ArticleAuthor, ArticleId, Language, MultilingualField};
