// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleAuthor, ArticleFilter, ArticleId, ArticleReadRepository, ArticleUpdate,
    ArticleWriteRepository, MultilingualField, NewArticle, PageRequest,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder, types::Json};
use std::collections::BTreeMap;

const ARTICLE_COLUMNS: &str = "id, title, content, author, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: Json<BTreeMap<String, String>>,
    content: Json<BTreeMap<String, String>>,
    author: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        let malformed =
            |column: &str, err: DomainError| DomainError::Persistence(format!("malformed {column}: {err}"));

        Ok(Self {
            id: ArticleId::new(row.id)?,
            title: MultilingualField::try_from_code_map(row.title.0)
                .map_err(|err| malformed("title", err))?,
            content: MultilingualField::try_from_code_map(row.content.0)
                .map_err(|err| malformed("content", err))?,
            author: ArticleAuthor::new(row.author).map_err(|err| malformed("author", err))?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            content,
            author,
            created_at,
            updated_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "INSERT INTO articles (title, content, author, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(Json(title.to_code_map()))
        .bind(Json(content.to_code_map()))
        .bind(author.as_str())
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            title,
            content,
            author,
            updated_at,
        } = update;

        let maybe_row = sqlx::query_as::<_, ArticleRow>(&format!(
            "UPDATE articles SET title = $1, content = $2, author = $3, updated_at = $4
             WHERE id = $5
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(Json(title.to_code_map()))
        .bind(Json(content.to_code_map()))
        .bind(author.as_str())
        .bind(updated_at)
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let row = maybe_row.ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

impl PostgresArticleReadRepository {
    fn apply_conditions<'a>(builder: &mut QueryBuilder<'a, Postgres>, filter: &ArticleFilter) {
        let mut has_where = false;
        let mut push_clause = |builder: &mut QueryBuilder<'a, Postgres>| {
            builder.push(if has_where { " AND " } else { " WHERE " });
            has_where = true;
        };

        if let Some(title) = &filter.title {
            push_clause(builder);
            builder.push("title ->> ");
            builder.push_bind(title.lang.code());
            builder.push(" ILIKE ");
            builder.push_bind(like_pattern(&title.needle));
        }

        if let Some(author) = &filter.author {
            push_clause(builder);
            builder.push("author ILIKE ");
            builder.push_bind(like_pattern(author));
        }
    }

    async fn count(&self, filter: &ArticleFilter) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT COUNT(*) FROM articles");
        Self::apply_conditions(&mut builder, filter);

        let total = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        u64::try_from(total).map_err(|_| DomainError::Persistence("negative row count".into()))
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list_page(
        &self,
        filter: &ArticleFilter,
        page: PageRequest,
    ) -> DomainResult<(Vec<Article>, u64)> {
        let total = self.count(filter).await?;
        if page.offset() >= total {
            return Ok((Vec::new(), total));
        }

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS} FROM articles"));
        Self::apply_conditions(&mut builder, filter);
        builder.push(" ORDER BY id ASC LIMIT ");
        builder.push_bind(i64::from(page.per_page()));
        builder.push(" OFFSET ");
        builder.push_bind(i64::try_from(page.offset()).unwrap_or(i64::MAX));

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let articles = rows
            .into_iter()
            .map(Article::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((articles, total))
    }
}

/// Wraps a user needle in `%…%`, escaping LIKE metacharacters so they match
/// literally.
fn like_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_pattern_escapes_metacharacters() {
        assert_eq!(like_pattern("測試"), "%測試%");
        assert_eq!(like_pattern("50%_off\\"), "%50\\%\\_off\\\\%");
    }

    #[test]
    fn row_with_unknown_language_is_a_persistence_error() {
        let mut title = BTreeMap::new();
        title.insert("jp".to_string(), "タイトル".to_string());
        let mut content = BTreeMap::new();
        content.insert("zh".to_string(), "內容".to_string());

        let row = ArticleRow {
            id: 1,
            title: Json(title),
            content: Json(content),
            author: "作者".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        assert!(matches!(
            Article::try_from(row),
            Err(DomainError::Persistence(_))
        ));
    }
}
