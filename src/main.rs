// src/main.rs
use anyhow::Result;
use polyglot_articles::application::{ports::time::Clock, services::ApplicationServices};
use polyglot_articles::config::{AppConfig, ArticleStore};
use polyglot_articles::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use polyglot_articles::infrastructure::{
    database,
    repositories::{
        InMemoryArticleRepository, PostgresArticleReadRepository, PostgresArticleWriteRepository,
    },
    time::SystemClock,
};
use polyglot_articles::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type ArticleRepositories = (Arc<dyn ArticleWriteRepository>, Arc<dyn ArticleReadRepository>);

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let (article_write_repo, article_read_repo) = build_repositories(&config).await?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(
        article_write_repo,
        article_read_repo,
        clock,
        config.listing_defaults(),
    ));

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(public_base_url = config.public_base_url(), "listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn build_repositories(config: &AppConfig) -> Result<ArticleRepositories> {
    match config.store() {
        ArticleStore::Postgres => {
            let pool =
                database::init_pool(config.database_url(), config.database_max_connections())
                    .await?;
            database::run_migrations(&pool).await?;
            tracing::info!("using postgres article store");

            let write_repo: Arc<dyn ArticleWriteRepository> =
                Arc::new(PostgresArticleWriteRepository::new(pool.clone()));
            let read_repo: Arc<dyn ArticleReadRepository> =
                Arc::new(PostgresArticleReadRepository::new(pool));
            Ok((write_repo, read_repo))
        }
        ArticleStore::Memory => {
            tracing::warn!("using in-memory article store; data is lost on shutdown");
            let repo = Arc::new(InMemoryArticleRepository::new());
            let write_repo: Arc<dyn ArticleWriteRepository> = repo.clone();
            let read_repo: Arc<dyn ArticleReadRepository> = repo;
            Ok((write_repo, read_repo))
        }
    }
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
