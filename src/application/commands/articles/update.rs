use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::{ArticleUpdate, ArticleValidator},
};
use serde_json::Value;

pub struct UpdateArticleCommand {
    pub id: String,
    pub payload: Value,
}

impl ArticleCommandService {
    /// Replaces title, content and author wholesale. The payload is
    /// validated before the article is looked up.
    pub async fn update_article(&self, command: UpdateArticleCommand) -> ApplicationResult<ArticleDto> {
        let fields = ArticleValidator::validate(&command.payload)?;
        let id = Self::parse_id(&command.id)?;
        self.ensure_exists(id).await?;

        let update = ArticleUpdate::new(id, fields, self.clock.now());

        let updated = self.write_repo.update(update).await?;
        tracing::info!(article_id = %updated.id, "article updated");
        Ok(updated.into())
    }
}
