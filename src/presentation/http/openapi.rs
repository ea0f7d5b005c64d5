// src/presentation/http/openapi.rs
use crate::application::dto::{ArticleDto, PaginationLinks, PaginationMeta};
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8080";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

/// Documentation shape of a listing page.
#[derive(Debug, Serialize, ToSchema)]
pub struct ArticleListResponse {
    pub data: Vec<ArticleDto>,
    pub links: PaginationLinks,
    pub meta: PaginationMeta,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::delete_article,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            ArticleListResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::articles::ArticleWriteRequest,
            crate::application::dto::ArticleDto,
            crate::application::dto::LocalizedText,
            crate::application::dto::PaginationLinks,
            crate::application::dto::PaginationMeta
        )
    ),
    tags(
        (name = "Articles", description = "Multilingual article endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ServerCustomizer),
    info(
        title = "Polyglot Articles API",
        description = "Articles with per-language title and content",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ServerCustomizer;

impl Modify for ServerCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let url = env::var("PUBLIC_BASE_URL")
            .ok()
            .map(|value| value.trim().trim_end_matches('/').to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());

        openapi.servers = Some(vec![Server::new(url)]);
    }
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn snapshot_path() -> String {
    env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "openapi/openapi.json".to_string())
}

pub fn write_openapi_snapshot() -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let output_path = snapshot_path();
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
