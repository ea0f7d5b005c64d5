// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::articles::ArticleCommandService,
        ports::time::Clock,
        queries::articles::{ArticleQueryResolver, ArticleQueryService, ListingDefaults},
    },
    domain::article::{ArticleReadRepository, ArticleWriteRepository},
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
}

impl ApplicationServices {
    pub fn new(
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        clock: Arc<dyn Clock>,
        listing: ListingDefaults,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&clock),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_read_repo),
            ArticleQueryResolver::new(listing),
        ));

        Self {
            article_commands,
            article_queries,
        }
    }
}
