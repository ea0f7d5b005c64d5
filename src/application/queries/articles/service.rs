use std::sync::Arc;

use super::resolver::ArticleQueryResolver;
use crate::domain::article::ArticleReadRepository;

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) resolver: ArticleQueryResolver,
}

impl ArticleQueryService {
    pub fn new(read_repo: Arc<dyn ArticleReadRepository>, resolver: ArticleQueryResolver) -> Self {
        Self {
            read_repo,
            resolver,
        }
    }
}
