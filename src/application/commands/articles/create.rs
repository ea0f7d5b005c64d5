// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{ArticleValidator, NewArticle},
};
use serde_json::Value;

pub struct CreateArticleCommand {
    /// Raw request body; shape is checked by `ArticleValidator`.
    pub payload: Value,
}

impl ArticleCommandService {
    pub async fn create_article(&self, command: CreateArticleCommand) -> ApplicationResult<ArticleDto> {
        let fields = ArticleValidator::validate(&command.payload)?;
        let new_article = NewArticle::new(fields, self.clock.now());

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(article_id = %created.id, "article created");
        Ok(created.into())
    }
}
