use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cinemahunt::{
    db::{self, Cache, LikeStore, MemoryLikeStore, PgLikeStore},
    services::{GeminiClient, OmdbProvider},
    AppState, Config,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cinemahunt=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let (cache, cache_writer) = match config.redis_url.as_deref() {
        Some(url) => {
            let client = db::create_redis_client(url).context("invalid REDIS_URL")?;
            let (cache, handle) = Cache::new(client);
            tracing::info!("Movie lookups cached in Redis");
            (Some(cache), Some(handle))
        }
        None => {
            tracing::info!("REDIS_URL not set, movie lookups are not cached");
            (None, None)
        }
    };

    let likes: Arc<dyn LikeStore> = match config.database_url.as_deref() {
        Some(url) => {
            let pool = db::create_pool(url)
                .await
                .context("failed to connect to Postgres")?;
            Arc::new(PgLikeStore::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, likes are kept in memory only");
            Arc::new(MemoryLikeStore::new())
        }
    };

    let movies = Arc::new(OmdbProvider::new(
        config.omdb_api_key.clone(),
        config.omdb_api_url.clone(),
        cache,
    ));
    let model = Arc::new(GeminiClient::new(
        config.gemini_api_key.clone(),
        config.gemini_api_url.clone(),
        config.gemini_model.clone(),
    ));

    let state = AppState::new(movies, model, likes);
    let app = cinemahunt::create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr()))?;
    tracing::info!(addr = %config.bind_addr(), "Server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(handle) = cache_writer {
        handle.shutdown().await;
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}
