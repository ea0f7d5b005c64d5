// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::{ArticleDto, LocalizedText, Paginated},
    queries::articles::{GetArticleByIdQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{JsonPayload, ListingQuery};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use utoipa::{IntoParams, ToSchema};

/// Listing parameters as documented. Parsing goes through `ListingQuery`,
/// which keeps values as strings so malformed numbers fall back to defaults.
#[derive(Debug, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    /// Page number, default 1.
    #[param(value_type = Option<u32>, example = 1)]
    pub page: Option<String>,
    /// Page size, default 15, at most 100.
    #[param(value_type = Option<u32>, example = 15)]
    pub per_page: Option<String>,
    /// Case-insensitive substring of the title in `lang`.
    pub title: Option<String>,
    /// Case-insensitive substring of the author.
    pub author: Option<String>,
    /// Language the title filter applies to: `zh` (default), `en` or `ja`.
    pub lang: Option<String>,
}

/// Body accepted by create and update.
#[derive(Debug, ToSchema)]
pub struct ArticleWriteRequest {
    pub title: LocalizedText,
    pub content: LocalizedText,
    #[schema(min_length = 1, max_length = 20, example = "王小明")]
    pub author: String,
}

#[utoipa::path(
    get,
    path = "/api/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "One page of articles.", body = crate::presentation::http::openapi::ArticleListResponse),
        (status = 422, description = "Unsupported language.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    ListingQuery(params): ListingQuery,
) -> HttpResult<Json<Paginated<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_articles(ListArticlesQuery { params })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/articles",
    request_body = ArticleWriteRequest,
    responses(
        (status = 201, description = "Article created.", body = ArticleDto),
        (status = 400, description = "Body is not valid JSON.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Validation failed.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    JsonPayload(payload): JsonPayload,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let article = state
        .services
        .article_commands
        .create_article(CreateArticleCommand { payload })
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(article)))
}

#[utoipa::path(
    get,
    path = "/api/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "The article.", body = ArticleDto),
        (status = 404, description = "No such article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    request_body = ArticleWriteRequest,
    responses(
        (status = 200, description = "Article replaced.", body = ArticleDto),
        (status = 400, description = "Body is not valid JSON.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No such article.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Validation failed.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    JsonPayload(payload): JsonPayload,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .update_article(UpdateArticleCommand { id, payload })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 204, description = "Article deleted."),
        (status = 404, description = "No such article.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
